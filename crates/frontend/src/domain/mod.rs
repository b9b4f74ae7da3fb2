pub mod a001_cable_operator;
pub mod a002_contract;
pub mod a003_invoice;
pub mod a004_pole;
pub mod a005_project;
