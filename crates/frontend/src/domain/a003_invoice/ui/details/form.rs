use crate::shared::date_utils::{add_one_month, date_to_month, format_iso, month_to_date, parse_date};
use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::domain::common::ResourceId;

/// Invoice form state; the period is bound to two `<input type="month">`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceForm {
    pub id: Option<ResourceId>,
    pub contract: Option<ResourceId>,
    pub number: String,
    /// "YYYY-MM"
    pub start_month: String,
    /// "YYYY-MM", always the month after `start_month`
    pub end_month: String,
    pub amount: u64,
    pub paid: bool,
}

impl InvoiceForm {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let month = |d: Option<chrono::NaiveDate>| {
            d.map(|d| date_to_month(&format_iso(d))).unwrap_or_default()
        };
        Self {
            id: invoice.id,
            contract: invoice.contract,
            number: invoice.number.clone(),
            start_month: month(invoice.period_start),
            end_month: month(invoice.period_end),
            amount: invoice.amount,
            paid: invoice.paid,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Sets the start month and moves the end month right after it
    pub fn set_start_month(&mut self, month: String) {
        self.end_month = add_one_month(&month);
        self.start_month = month;
    }

    /// Backend representation, months pinned to day 1
    pub fn to_dto(&self) -> Invoice {
        let to_date = |month: &str| {
            if month.trim().is_empty() {
                None
            } else {
                parse_date(&month_to_date(month))
            }
        };
        Invoice {
            id: self.id,
            contract: self.contract,
            number: self.number.trim().to_string(),
            period_start: to_date(&self.start_month),
            period_end: to_date(&self.end_month),
            amount: self.amount,
            paid: self.paid,
        }
    }

    pub fn validated(&self) -> Result<Invoice, String> {
        let invoice = self.to_dto();
        invoice.validate()?;
        Ok(invoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_start_month_sets_end_month() {
        let mut form = InvoiceForm::default();
        form.set_start_month("2024-12".into());
        assert_eq!(form.end_month, "2025-01");

        form.set_start_month("2025-03".into());
        assert_eq!(form.end_month, "2025-04");

        form.set_start_month(String::new());
        assert_eq!(form.end_month, "");
    }

    #[test]
    fn test_to_dto_uses_first_of_month() {
        let form = InvoiceForm {
            contract: Some(2),
            number: "FV-10".into(),
            start_month: "2024-12".into(),
            end_month: "2025-01".into(),
            amount: 250_000,
            ..Default::default()
        };
        let dto = form.to_dto();
        assert_eq!(dto.period_start, Some(d("2024-12-01")));
        assert_eq!(dto.period_end, Some(d("2025-01-01")));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["periodo_inicio"], "2024-12-01");
        assert_eq!(json["periodo_fin"], "2025-01-01");
        assert!(form.validated().is_ok());
    }

    #[test]
    fn test_from_invoice_reads_months() {
        let invoice = Invoice {
            id: Some(8),
            period_start: Some(d("2024-05-01")),
            period_end: Some(d("2024-06-01")),
            ..Default::default()
        };
        let form = InvoiceForm::from_invoice(&invoice);
        assert_eq!(form.start_month, "2024-05");
        assert_eq!(form.end_month, "2024-06");
        assert!(form.is_edit_mode());
        assert_eq!(form.to_dto().period_start, invoice.period_start);
    }

    #[test]
    fn test_missing_period_fails_validation() {
        let form = InvoiceForm {
            contract: Some(1),
            amount: 10,
            ..Default::default()
        };
        assert_eq!(
            form.validated().unwrap_err(),
            "El periodo de pago es obligatorio"
        );
    }
}
