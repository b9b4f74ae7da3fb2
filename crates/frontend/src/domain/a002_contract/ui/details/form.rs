use crate::shared::date_utils::{
    compute_contract_end, compute_contract_status, format_iso, parse_date,
};
use chrono::NaiveDate;
use contracts::domain::a002_contract::aggregate::{Contract, ElementUsage};
use contracts::domain::common::ResourceId;

/// One of the four usage blocks of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageBlock {
    Nap,
    Cable,
    CajaEmpalme,
    Reserva,
}

impl UsageBlock {
    pub const ALL: [UsageBlock; 4] = [
        UsageBlock::Nap,
        UsageBlock::Cable,
        UsageBlock::CajaEmpalme,
        UsageBlock::Reserva,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UsageBlock::Nap => "NAP",
            UsageBlock::Cable => "Cable",
            UsageBlock::CajaEmpalme => "Caja de empalme",
            UsageBlock::Reserva => "Reserva",
        }
    }
}

/// Contract form state as bound to the inputs
///
/// Dates are kept as the `<input type="date">` strings; `end_date` and
/// `status` are derived and never typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractForm {
    pub id: Option<ResourceId>,
    pub cable_operator: Option<ResourceId>,
    pub number: String,
    pub start_date: String,
    pub duration_years: u32,
    pub end_date: String,
    pub status: String,
    pub nap: ElementUsage,
    pub cable: ElementUsage,
    pub caja_empalme: ElementUsage,
    pub reserva: ElementUsage,
}

impl Default for ContractForm {
    fn default() -> Self {
        Self {
            id: None,
            cable_operator: None,
            number: String::new(),
            start_date: String::new(),
            duration_years: 1,
            end_date: String::new(),
            status: String::new(),
            nap: ElementUsage::default(),
            cable: ElementUsage::default(),
            caja_empalme: ElementUsage::default(),
            reserva: ElementUsage::default(),
        }
    }
}

impl ContractForm {
    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            id: contract.id,
            cable_operator: contract.cable_operator,
            number: contract.number.clone(),
            start_date: contract.start_date.map(format_iso).unwrap_or_default(),
            duration_years: contract.duration_years,
            end_date: contract.end_date.map(format_iso).unwrap_or_default(),
            status: contract.status.clone(),
            nap: contract.nap,
            cable: contract.cable,
            caja_empalme: contract.caja_empalme,
            reserva: contract.reserva,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Returns whether the end date changed
    pub fn set_start_date(&mut self, value: String, today: NaiveDate) -> bool {
        self.start_date = value;
        self.recompute(today)
    }

    /// Returns whether the end date changed
    pub fn set_duration_years(&mut self, years: u32, today: NaiveDate) -> bool {
        self.duration_years = years;
        self.recompute(today)
    }

    /// Re-derive end date and status from the typed fields
    ///
    /// The end date is only written when the computed value differs.
    pub fn recompute(&mut self, today: NaiveDate) -> bool {
        let end = compute_contract_end(&self.start_date, self.duration_years);
        let changed = end != self.end_date;
        if changed {
            self.end_date = end;
        }
        self.status = compute_contract_status(today, &self.start_date, &self.end_date);
        changed
    }

    pub fn usage(&self, block: UsageBlock) -> ElementUsage {
        match block {
            UsageBlock::Nap => self.nap,
            UsageBlock::Cable => self.cable,
            UsageBlock::CajaEmpalme => self.caja_empalme,
            UsageBlock::Reserva => self.reserva,
        }
    }

    pub fn usage_mut(&mut self, block: UsageBlock) -> &mut ElementUsage {
        match block {
            UsageBlock::Nap => &mut self.nap,
            UsageBlock::Cable => &mut self.cable,
            UsageBlock::CajaEmpalme => &mut self.caja_empalme,
            UsageBlock::Reserva => &mut self.reserva,
        }
    }

    pub fn monthly_total(&self) -> u64 {
        self.to_contract().monthly_total()
    }

    pub fn to_contract(&self) -> Contract {
        Contract {
            id: self.id,
            cable_operator: self.cable_operator,
            number: self.number.trim().to_string(),
            start_date: parse_date(&self.start_date),
            duration_years: self.duration_years,
            end_date: parse_date(&self.end_date),
            status: self.status.clone(),
            nap: self.nap,
            cable: self.cable,
            caja_empalme: self.caja_empalme,
            reserva: self.reserva,
        }
    }

    /// Contract ready to submit, or the first validation message
    pub fn validated(&self) -> Result<Contract, String> {
        let contract = self.to_contract();
        contract.validate()?;
        Ok(contract)
    }
}
