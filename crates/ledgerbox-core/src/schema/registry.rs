//! Model registry: maps model identifiers to schemas and sample payloads.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::models::document::DocumentModel;

use super::bank_statement::BANK_STATEMENT;
use super::field::Schema;
use super::invoice::INVOICE;
use super::receipt::RECEIPT;

/// Schema for a model.
pub fn resolve(model: DocumentModel) -> &'static Schema {
    match model {
        DocumentModel::Invoice => &INVOICE,
        DocumentModel::Receipt => &RECEIPT,
        DocumentModel::BankStatement => &BANK_STATEMENT,
    }
}

/// Schema for a model identifier string.
///
/// Fails with [`LedgerBoxError::UnknownModel`](crate::LedgerBoxError::UnknownModel)
/// for anything other than `invoice`, `receipt` or `bankstatement`.
pub fn resolve_str(model_id: &str) -> Result<&'static Schema> {
    let model: DocumentModel = model_id.parse()?;
    let schema = resolve(model);
    debug!("Resolved model {} to schema {}", model, schema.name);
    Ok(schema)
}

/// Representative normalized output for a model.
pub fn sample(model: DocumentModel) -> Value {
    match model {
        DocumentModel::Invoice => json!({
            "id": "job-12345",
            "status": "success",
            "jobId": "job-12345",
            "model": "invoice",
            "CustomerName": "ACME Corporation",
            "InvoiceId": "INV-001",
            "InvoiceDate": "2023-06-01",
            "DueDate": "2023-07-01",
            "VendorName": "Supplier Inc.",
            "InvoiceTotal": 1100.0,
            "LineItems": [
                {
                    "Items": "Product A",
                    "Amount": 500.0,
                    "Quantity": 5,
                    "UnitPrice": 100.0
                }
            ]
        }),
        DocumentModel::Receipt => json!({
            "id": "job-12346",
            "status": "success",
            "jobId": "job-12346",
            "model": "receipt",
            "MerchantName": "Local Store",
            "Total": 50.0,
            "TransactionDate": "2023-06-02",
            "Items": [
                {
                    "Description": "Item A",
                    "Quantity": 2,
                    "Price": 25.0
                }
            ]
        }),
        DocumentModel::BankStatement => json!({
            "id": "job-12347",
            "status": "success",
            "jobId": "job-12347",
            "model": "bankstatement",
            "CustomerName": "",
            "AccountNumber": "1234567890",
            "BankName": "Example Bank",
            "BankAddress": "",
            "PeriodStartDate": "2023-05-01",
            "PeriodEndDate": "2023-05-31",
            "StartingBalance": "1000.00",
            "EndingBalance": "1500.00",
            "LineItems": [
                {
                    "Date": "2023-05-15",
                    "Description": "Deposit",
                    "Credits": "500.00",
                    "Debits": "",
                    "Balance": "1500.00"
                }
            ]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerBoxError;
    use crate::schema::bank_statement::BANK_LINE_ITEM;
    use crate::schema::field::{FieldType, Policy};
    use crate::schema::invoice::LINE_ITEM;
    use crate::schema::receipt::RECEIPT_ITEM;
    use pretty_assertions::assert_eq;

    fn names(schema: &Schema) -> Vec<&'static str> {
        schema.field_names().collect()
    }

    #[test]
    fn test_invoice_fields() {
        assert_eq!(
            names(resolve_str("invoice").unwrap()),
            vec![
                "CustomerName",
                "CustomerId",
                "PurchaseOrder",
                "InvoiceId",
                "InvoiceDate",
                "DueDate",
                "VendorName",
                "VendorTaxId",
                "VendorAddress",
                "VendorAddressRecipient",
                "CustomerAddress",
                "CustomerTaxId",
                "CustomerAddressRecipient",
                "BillingAddress",
                "BillingAddressRecipient",
                "ShippingAddress",
                "ShippingAddressRecipient",
                "PaymentTerm",
                "SubTotal",
                "TotalTax",
                "InvoiceTotal",
                "AmountDue",
                "ServiceAddress",
                "ServiceAddressRecipient",
                "RemittanceAddress",
                "RemittanceAddressRecipient",
                "ServiceStartDate",
                "ServiceEndDate",
                "PreviousUnpaidBalance",
                "CurrencyCode",
                "KVKNumber",
                "PaymentDetails",
                "TotalDiscount",
                "TaxItems",
                "LineItems",
                "AdditionalItems",
            ]
        );
        assert_eq!(
            names(&LINE_ITEM),
            vec![
                "Items",
                "Amount",
                "Description",
                "Quantity",
                "UnitPrice",
                "ProductCode",
                "Unit",
                "Date",
                "Tax",
                "TaxRate",
            ]
        );
    }

    #[test]
    fn test_receipt_fields() {
        assert_eq!(
            names(resolve_str("receipt").unwrap()),
            vec![
                "MerchantName",
                "MerchantPhoneNumber",
                "MerchantAddress",
                "Total",
                "TransactionDate",
                "TransactionTime",
                "Subtotal",
                "TotalTax",
                "Tip",
                "Items",
                "TaxDetails",
                "AdditionalItems",
            ]
        );
        assert_eq!(
            names(&RECEIPT_ITEM),
            vec!["TotalPrice", "Description", "Quantity", "Price", "ProductCode", "QuantityUnit"]
        );
    }

    #[test]
    fn test_bank_statement_fields() {
        let schema = resolve_str("bankstatement").unwrap();
        assert_eq!(
            names(schema),
            vec![
                "CustomerName",
                "AccountNumber",
                "BankName",
                "BankAddress",
                "PeriodStartDate",
                "PeriodEndDate",
                "StartingBalance",
                "EndingBalance",
                "LineItems",
            ]
        );
        assert_eq!(
            names(&BANK_LINE_ITEM),
            vec!["Date", "Description", "Credits", "Debits", "Balance"]
        );
        assert!(schema
            .fields
            .iter()
            .chain(BANK_LINE_ITEM.fields)
            .all(|f| f.policy == Policy::DefaultOnMissing));
    }

    #[test]
    fn test_invoice_and_receipt_are_nullable() {
        for schema in [&INVOICE, &RECEIPT] {
            for field in schema.fields {
                assert_eq!(field.policy, Policy::NullableOptional, "{}", field.name);
                if let FieldType::Records(nested) = field.field_type {
                    assert!(nested.fields.iter().all(|f| f.policy == Policy::NullableOptional));
                }
            }
        }
    }

    #[test]
    fn test_unknown_model() {
        assert!(matches!(
            resolve_str("unknown"),
            Err(LedgerBoxError::UnknownModel(m)) if m == "unknown"
        ));
        assert!(resolve_str("").is_err());
    }

    #[test]
    fn test_samples_carry_their_model() {
        for model in DocumentModel::ALL {
            let sample = sample(model);
            assert_eq!(sample["model"], model.as_str());
            assert_eq!(sample["id"], sample["jobId"]);
        }
    }
}
