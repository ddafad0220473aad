//! Invoice model schema.

use super::field::{FieldDescriptor as F, Schema};

/// A single invoice line.
pub static LINE_ITEM: Schema = Schema {
    name: "LineItem",
    fields: &[
        F::string("Items"),
        F::number("Amount"),
        F::string("Description"),
        F::number("Quantity"),
        F::number("UnitPrice"),
        F::string("ProductCode"),
        F::string("Unit"),
        F::coerced("Date"),
        F::number("Tax"),
        F::number("TaxRate"),
    ],
};

/// Free-form name/value pair the extractor could not map to a known field.
/// Shared with the receipt model.
pub static ADDITIONAL_ITEM: Schema = Schema {
    name: "AdditionalItem",
    fields: &[F::string("FieldName"), F::string("FieldValue")],
};

/// Invoice record. Every field is nullable-optional.
pub static INVOICE: Schema = Schema {
    name: "Invoice",
    fields: &[
        F::string("CustomerName"),
        F::string("CustomerId"),
        F::string("PurchaseOrder"),
        F::string("InvoiceId"),
        F::coerced("InvoiceDate"),
        F::coerced("DueDate"),
        F::string("VendorName"),
        F::string("VendorTaxId"),
        F::string("VendorAddress"),
        F::string("VendorAddressRecipient"),
        F::string("CustomerAddress"),
        F::string("CustomerTaxId"),
        F::string("CustomerAddressRecipient"),
        F::string("BillingAddress"),
        F::string("BillingAddressRecipient"),
        F::string("ShippingAddress"),
        F::string("ShippingAddressRecipient"),
        F::string("PaymentTerm"),
        F::number("SubTotal"),
        F::number("TotalTax"),
        F::number("InvoiceTotal"),
        F::number("AmountDue"),
        F::string("ServiceAddress"),
        F::string("ServiceAddressRecipient"),
        F::string("RemittanceAddress"),
        F::string("RemittanceAddressRecipient"),
        F::coerced("ServiceStartDate"),
        F::coerced("ServiceEndDate"),
        F::number("PreviousUnpaidBalance"),
        F::string("CurrencyCode"),
        F::string("KVKNumber"),
        F::string_list("PaymentDetails"),
        F::number("TotalDiscount"),
        F::string_list("TaxItems"),
        F::records("LineItems", &LINE_ITEM),
        F::records("AdditionalItems", &ADDITIONAL_ITEM),
    ],
};
