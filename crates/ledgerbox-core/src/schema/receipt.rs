//! Receipt model schema.

use super::field::{FieldDescriptor as F, Schema};
use super::invoice::ADDITIONAL_ITEM;

/// A purchased item on a receipt.
pub static RECEIPT_ITEM: Schema = Schema {
    name: "ReceiptItem",
    fields: &[
        F::number("TotalPrice"),
        F::string("Description"),
        F::number("Quantity"),
        F::number("Price"),
        F::string("ProductCode"),
        F::string("QuantityUnit"),
    ],
};

pub static TAX_DETAIL: Schema = Schema {
    name: "TaxDetail",
    fields: &[F::number("Amount")],
};

/// Receipt record. Every field is nullable-optional.
pub static RECEIPT: Schema = Schema {
    name: "Receipt",
    fields: &[
        F::string("MerchantName"),
        F::string("MerchantPhoneNumber"),
        F::string("MerchantAddress"),
        F::number("Total"),
        F::coerced("TransactionDate"),
        F::coerced("TransactionTime"),
        F::number("Subtotal"),
        F::number("TotalTax"),
        F::number("Tip"),
        F::records("Items", &RECEIPT_ITEM),
        F::records("TaxDetails", &TAX_DETAIL),
        F::records("AdditionalItems", &ADDITIONAL_ITEM),
    ],
};
