//! Strongly-typed view of a loosely-typed creation payload

use super::{filters, validators};
use crate::core::error::FieldErrors;
use crate::core::order::{NewOrder, OrderStatus};
use serde_json::Value;

/// Order fields as submitted, after coercion
///
/// A field is `None` when it was absent or could not be coerced to the
/// expected type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCandidate {
    pub order_number: Option<String>,
    pub customer: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub total_gross: Option<f64>,
}

impl OrderCandidate {
    /// Coerce a JSON body; non-object bodies yield an all-empty candidate
    pub fn from_json(body: &Value) -> Self {
        Self {
            order_number: filters::text(body.get("orderNumber")),
            customer: filters::text(body.get("customer")),
            status: filters::text(body.get("status")),
            due_date: filters::text(body.get("dueDate")),
            total_gross: filters::number(body.get("totalGross")),
        }
    }

    /// Run the validator over this candidate
    pub fn validate(&self) -> FieldErrors {
        validators::validate(self)
    }

    /// Validate and convert into a [`NewOrder`]
    ///
    /// Either every invariant holds and a `NewOrder` is returned, or the full
    /// set of field errors is.
    pub fn into_new_order(self) -> Result<NewOrder, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(order_number) = self.order_number else {
            return Err(errors_for("orderNumber", validators::ORDER_NUMBER_MESSAGE));
        };
        let Some(customer) = self.customer else {
            return Err(errors_for("customer", validators::CUSTOMER_MESSAGE));
        };
        let Some(status) = self.status.as_deref().and_then(|s| s.parse::<OrderStatus>().ok())
        else {
            return Err(errors_for("status", validators::STATUS_MESSAGE));
        };
        let Some(due_date) = self.due_date else {
            return Err(errors_for("dueDate", validators::DUE_DATE_MESSAGE));
        };
        let Some(total_gross) = self.total_gross else {
            return Err(errors_for("totalGross", validators::TOTAL_GROSS_MESSAGE));
        };

        Ok(NewOrder {
            order_number,
            customer,
            status,
            due_date,
            total_gross,
        })
    }
}

fn errors_for(field: &'static str, message: &'static str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field, message);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_camel_case_fields() {
        let candidate = OrderCandidate::from_json(&json!({
            "orderNumber": "ABCDEF",
            "customer": "X",
            "status": "new",
            "dueDate": "2025-01-01",
            "totalGross": "10"
        }));
        assert_eq!(candidate.order_number.as_deref(), Some("ABCDEF"));
        assert_eq!(candidate.total_gross, Some(10.0));
    }

    #[test]
    fn test_from_json_non_object_is_empty() {
        assert_eq!(OrderCandidate::from_json(&json!([1, 2])), OrderCandidate::default());
        assert_eq!(OrderCandidate::from_json(&json!("x")), OrderCandidate::default());
    }

    #[test]
    fn test_into_new_order_success_keeps_submitted_values() {
        let new = OrderCandidate::from_json(&json!({
            "orderNumber": "ABCDEF",
            "customer": " X ",
            "status": "processing",
            "dueDate": "2025-01-01",
            "totalGross": 10
        }))
        .into_new_order()
        .unwrap();

        assert_eq!(new.order_number(), "ABCDEF");
        assert_eq!(new.customer, " X ");
        assert_eq!(new.status(), OrderStatus::Processing);
        assert_eq!(new.total_gross, 10.0);
    }

    #[test]
    fn test_into_new_order_non_numeric_total_is_field_error() {
        let errors = OrderCandidate::from_json(&json!({
            "orderNumber": "ABCDEF",
            "customer": "X",
            "status": "new",
            "dueDate": "2025-01-01",
            "totalGross": "ten"
        }))
        .into_new_order()
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["totalGross"]);
    }

    #[test]
    fn test_into_new_order_errors_name_wire_fields_only() {
        let wire_fields = ["orderNumber", "customer", "status", "dueDate", "totalGross"];
        let valid = OrderCandidate {
            order_number: Some("ABCDEF".to_string()),
            customer: Some("X".to_string()),
            status: Some("new".to_string()),
            due_date: Some("2025-01-01".to_string()),
            total_gross: Some(10.0),
        };

        let cases = vec![
            ("orderNumber", OrderCandidate { order_number: None, ..valid.clone() }),
            ("customer", OrderCandidate { customer: None, ..valid.clone() }),
            ("status", OrderCandidate { status: None, ..valid.clone() }),
            ("dueDate", OrderCandidate { due_date: None, ..valid.clone() }),
            ("totalGross", OrderCandidate { total_gross: None, ..valid.clone() }),
        ];

        for (field, candidate) in cases {
            let errors = candidate.into_new_order().unwrap_err();
            let fields: Vec<_> = errors.fields().collect();
            assert_eq!(fields, vec![field]);
            assert!(fields.iter().all(|f| wire_fields.contains(f)));
        }
        assert!(valid.into_new_order().is_ok());
    }
}
