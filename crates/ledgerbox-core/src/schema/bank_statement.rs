//! Bank statement model schema.
//!
//! Unlike invoices and receipts, every bank statement field is
//! default-on-missing: the normalized record always carries every key.
//! Balances and amounts arrive as numbers or strings and are normalized to
//! strings.

use super::field::{FieldDescriptor as F, Schema};

pub static BANK_LINE_ITEM: Schema = Schema {
    name: "BankLineItem",
    fields: &[
        F::string("Date").or_default(),
        F::string("Description").or_default(),
        F::coerced("Credits").or_default(),
        F::coerced("Debits").or_default(),
        F::coerced("Balance").or_default(),
    ],
};

pub static BANK_STATEMENT: Schema = Schema {
    name: "BankStatement",
    fields: &[
        F::string("CustomerName").or_default(),
        F::string("AccountNumber").or_default(),
        F::string("BankName").or_default(),
        F::string("BankAddress").or_default(),
        F::coerced("PeriodStartDate").or_default(),
        F::coerced("PeriodEndDate").or_default(),
        F::coerced("StartingBalance").or_default(),
        F::coerced("EndingBalance").or_default(),
        F::records("LineItems", &BANK_LINE_ITEM).or_default(),
    ],
};
