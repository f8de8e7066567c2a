//! # Blockchain Explorer
//!
//! Read-only views over the mock credit ledger: transaction history,
//! NFT certificates and the smart contract audit summary.

use crate::models::{Certificate, CertificateStatus, Transaction, TransactionKind};
use serde::Serialize;

/// Explorer sub-tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerTab {
    Transactions,
    Certificates,
    Audit,
}

string_enum!(ExplorerTab, "explorer tab", {
    Transactions => "transactions",
    Certificates => "certificates",
    Audit => "audit",
});

/// Transaction history in ledger order
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions touching the credit lot `credit_id`
    pub fn history_for<'a>(&'a self, credit_id: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.transactions
            .iter()
            .filter(move |tx| tx.credit_id == credit_id)
    }

    /// Credits of `credit_id` still in circulation: minted minus retired.
    /// Transfers move credits without changing supply.
    pub fn supply(&self, credit_id: &str) -> u64 {
        self.history_for(credit_id)
            .fold(0u64, |supply, tx| match tx.kind {
                TransactionKind::Mint => supply.saturating_add(tx.amount),
                TransactionKind::Retire => supply.saturating_sub(tx.amount),
                TransactionKind::Transfer => supply,
            })
    }

    /// Total credits ever retired across all lots
    pub fn retired_total(&self) -> u64 {
        self.transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Retire)
            .map(|tx| tx.amount)
            .sum()
    }

    /// Whether every transaction carries a verified flag
    pub fn fully_verified(&self) -> bool {
        self.transactions.iter().all(|tx| tx.verified)
    }
}

/// Certificates still backing live credits
pub fn active_certificates(certificates: &[Certificate]) -> impl Iterator<Item = &Certificate> {
    certificates
        .iter()
        .filter(|c| c.status == CertificateStatus::Active)
}

/// Smart contract audit summary shown on the audit tab
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Percent
    pub security_score: u8,
    pub vulnerabilities: u32,
    pub grade: String,
    pub checks: Vec<String>,
}

impl Default for AuditReport {
    fn default() -> Self {
        Self {
            security_score: 100,
            vulnerabilities: 0,
            grade: "A+".to_string(),
            checks: [
                "Smart contract deployed with verified bytecode",
                "No critical or high-severity vulnerabilities found",
                "Implements industry-standard security patterns",
                "Gas optimization verified",
                "Multi-signature wallet integration",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, MockCatalog};

    fn ledger() -> Ledger {
        Ledger::new(MockCatalog::new().transactions().unwrap())
    }

    #[test]
    fn test_supply_ignores_transfers() {
        let ledger = ledger();
        assert_eq!(ledger.supply("BC-001-2024"), 500);
        assert_eq!(ledger.supply("BC-404"), 0);
    }

    #[test]
    fn test_history_for_keeps_order() {
        let ledger = ledger();
        let kinds: Vec<TransactionKind> = ledger.history_for("BC-001-2024").map(|tx| tx.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Mint,
                TransactionKind::Transfer,
                TransactionKind::Retire
            ]
        );
    }

    #[test]
    fn test_retired_total_and_verification() {
        let ledger = ledger();
        assert_eq!(ledger.retired_total(), 500);
        assert!(ledger.fully_verified());
        assert!(Ledger::default().fully_verified());
    }

    #[test]
    fn test_active_certificates() {
        let certificates = MockCatalog::new().certificates().unwrap();
        let active: Vec<&str> = active_certificates(&certificates)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(active, vec!["BC-001-2024"]);
    }

    #[test]
    fn test_explorer_tab_names() {
        assert_eq!("Audit".parse::<ExplorerTab>().unwrap(), ExplorerTab::Audit);
        assert_eq!(ExplorerTab::Certificates.as_str(), "certificates");
        assert!("wallet".parse::<ExplorerTab>().is_err());
    }

    #[test]
    fn test_audit_report_default() {
        let report = AuditReport::default();
        assert_eq!(report.grade, "A+");
        assert_eq!(report.checks.len(), 5);
    }
}
