//! Customer ledger transaction records exported from the ERP

use super::timestamp::sentinel_epoch;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Record identifier; zero marks an empty placeholder record
pub type RecordId = u64;

/// Transaction types that are reported for matching
pub const MATCHABLE_TRANS_TYPES: [&str; 2] = ["Cust", "GeneralJournal"];

/// One ledger-transaction-customer record
///
/// Fields missing from the source read as zero (numbers), the sentinel epoch
/// (dates) or the empty string (text).
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerTransaction {
    pub rec_id: RecordId,
    pub trans_type: String,

    /// Closing date; the sentinel epoch means "still open"
    pub closed: NaiveDateTime,

    pub trans_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub invoice: String,
    pub voucher: String,
    pub amount_cur: Decimal,
    pub settle_amount_cur: Decimal,
    pub currency_code: String,
    pub cust_account_num: String,
    pub customer_name: String,
    pub data_area_id: String,
    pub paym_reference: String,

    /// Free text, reported as the `CarID` custom field
    pub txt: String,
}

impl Default for CustomerTransaction {
    fn default() -> Self {
        CustomerTransaction {
            rec_id: 0,
            trans_type: String::new(),
            closed: sentinel_epoch(),
            trans_date: sentinel_epoch(),
            due_date: sentinel_epoch(),
            invoice: String::new(),
            voucher: String::new(),
            amount_cur: Decimal::ZERO,
            settle_amount_cur: Decimal::ZERO,
            currency_code: String::new(),
            cust_account_num: String::new(),
            customer_name: String::new(),
            data_area_id: String::new(),
            paym_reference: String::new(),
            txt: String::new(),
        }
    }
}

impl CustomerTransaction {
    /// True for the empty records the export emits between real ones
    pub fn is_placeholder(&self) -> bool {
        self.rec_id == 0
    }

    pub fn is_matchable_type(&self) -> bool {
        MATCHABLE_TRANS_TYPES.contains(&self.trans_type.as_str())
    }

    /// Closed strictly after the sentinel epoch
    pub fn is_closed(&self) -> bool {
        self.closed > sentinel_epoch()
    }

    /// Amount still open: `AMOUNTCUR - SETTLEAMOUNTCUR`
    pub fn remaining_amount(&self) -> Decimal {
        self.amount_cur - self.settle_amount_cur
    }
}
