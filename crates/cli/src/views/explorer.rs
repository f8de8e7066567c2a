//! # Explorer View
//!
//! Ledger transactions, NFT certificates and the contract audit summary.

use anyhow::Result;
use aquacarbon_core::catalog::CatalogSource;
use aquacarbon_core::explorer::{active_certificates, AuditReport, ExplorerTab, Ledger};
use aquacarbon_core::models::{Certificate, Transaction};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum ExplorerPage {
    Transactions {
        #[serde(skip_serializing_if = "Option::is_none")]
        credit: Option<String>,
        /// Minted minus retired, when a credit lot is selected
        #[serde(skip_serializing_if = "Option::is_none")]
        supply: Option<u64>,
        /// Credits retired by the listed transactions
        retired: u64,
        /// Every listed transaction carries the verified flag
        #[serde(rename = "allVerified")]
        all_verified: bool,
        transactions: Vec<Transaction>,
    },
    Certificates {
        /// Certificates still backing live credits
        active: usize,
        certificates: Vec<Certificate>,
    },
    Audit {
        report: AuditReport,
    },
}

pub fn build(
    source: &dyn CatalogSource,
    tab: ExplorerTab,
    credit: Option<&str>,
) -> Result<ExplorerPage> {
    let page = match tab {
        ExplorerTab::Transactions => {
            let ledger = Ledger::new(source.transactions()?);
            let (supply, listed) = match credit {
                Some(id) => (
                    Some(ledger.supply(id)),
                    Ledger::new(ledger.history_for(id).cloned().collect()),
                ),
                None => (None, ledger),
            };
            ExplorerPage::Transactions {
                credit: credit.map(str::to_string),
                supply,
                retired: listed.retired_total(),
                all_verified: listed.fully_verified(),
                transactions: listed.transactions().to_vec(),
            }
        }
        ExplorerTab::Certificates => {
            let certificates = source.certificates()?;
            ExplorerPage::Certificates {
                active: active_certificates(&certificates).count(),
                certificates,
            }
        }
        ExplorerTab::Audit => ExplorerPage::Audit {
            report: AuditReport::default(),
        },
    };
    Ok(page)
}

pub fn render(page: &ExplorerPage) -> String {
    let mut out = String::from("Blockchain Explorer\n\n");
    match page {
        ExplorerPage::Transactions {
            credit,
            supply,
            retired,
            all_verified,
            transactions,
        } => {
            out.push_str("Transaction History\n");
            if let (Some(credit), Some(supply)) = (credit, supply) {
                out.push_str(&format!("  {} in circulation: {}\n", credit, supply));
            }
            out.push_str(&format!("  Retired: {} credits\n", retired));
            if *all_verified && !transactions.is_empty() {
                out.push_str("  All transactions verified on-chain\n");
            }
            for tx in transactions {
                let check = if tx.verified { " (verified)" } else { "" };
                out.push_str(&format!(
                    "  {:<8} {} credits | {} | {} -> {} | {} | {}{}\n",
                    tx.kind.as_str().to_uppercase(),
                    tx.amount,
                    tx.credit_id,
                    tx.from,
                    tx.to,
                    tx.timestamp.format("%Y-%m-%d %H:%M"),
                    tx.tx_hash,
                    check,
                ));
            }
        }
        ExplorerPage::Certificates {
            active,
            certificates,
        } => {
            out.push_str(&format!(
                "NFT Certificates ({} of {} active)\n",
                active,
                certificates.len()
            ));
            for c in certificates {
                out.push_str(&format!(
                    "  {} [{}] {}\n      {} tCO2 | vintage {} | issued {}\n",
                    c.id, c.status, c.project_name, c.quantity, c.vintage, c.issue_date,
                ));
            }
        }
        ExplorerPage::Audit { report } => {
            out.push_str("Smart Contract Audit\n");
            out.push_str(&format!(
                "  Security Score: {}%  Vulnerabilities: {}  Grade: {}\n",
                report.security_score, report.vulnerabilities, report.grade
            ));
            for check in &report.checks {
                out.push_str(&format!("  [x] {}\n", check));
            }
        }
    }
    out
}
