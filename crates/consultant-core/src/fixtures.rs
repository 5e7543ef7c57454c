//! Fixed display data backing every screen
//!
//! Nothing here is fetched; these literals stand in for the market-data,
//! advisory and billing backends.

use chrono::NaiveDate;

use crate::billing::{Plan, PlanId, Transaction, TransactionStatus, UsageQuota};
use crate::market::{
    AdviceKind, CatalogEntry, DashboardStat, Holding, PortfolioSummary, RecentAdvice,
    StockAdvice, Trend,
};

/// Stocks the portfolio search can find
pub const STOCK_CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        ticker: "TCS",
        company: "Tata Consultancy Services",
        sector: "Technology",
    },
    CatalogEntry {
        ticker: "HDFCBANK",
        company: "HDFC Bank Ltd",
        sector: "Banking",
    },
    CatalogEntry {
        ticker: "ICICIBANK",
        company: "ICICI Bank Ltd",
        sector: "Banking",
    },
    CatalogEntry {
        ticker: "SBIN",
        company: "State Bank of India",
        sector: "Banking",
    },
    CatalogEntry {
        ticker: "BHARTIARTL",
        company: "Bharti Airtel Ltd",
        sector: "Telecom",
    },
    CatalogEntry {
        ticker: "ITC",
        company: "ITC Limited",
        sector: "FMCG",
    },
    CatalogEntry {
        ticker: "WIPRO",
        company: "Wipro Limited",
        sector: "Technology",
    },
    CatalogEntry {
        ticker: "MARUTI",
        company: "Maruti Suzuki India Ltd",
        sector: "Automotive",
    },
];

/// Holdings every fresh portfolio view starts with
pub fn seed_holdings() -> Vec<Holding> {
    vec![
        Holding {
            id: "1".to_string(),
            ticker: "RELIANCE".to_string(),
            company: "Reliance Industries Ltd".to_string(),
            sector: "Energy".to_string(),
            quantity: 50,
            price: 2456.75,
            change: 2.34,
        },
        Holding {
            id: "2".to_string(),
            ticker: "INFY".to_string(),
            company: "Infosys Limited".to_string(),
            sector: "Technology".to_string(),
            quantity: 100,
            price: 1543.20,
            change: -1.12,
        },
    ]
}

pub fn stock_advice() -> Vec<StockAdvice> {
    vec![
        StockAdvice {
            ticker: "RELIANCE",
            company: "Reliance Industries Ltd",
            current_price: 2456.75,
            change: 2.34,
            advice: AdviceKind::Hold,
            reason: "Strong quarterly earnings with robust petrochemical margins. Company showing resilience in volatile market conditions.",
            risk_note: "Energy sector facing regulatory headwinds",
            confidence: 85,
            target_price: Some(2650.0),
            quantity: 50,
        },
        StockAdvice {
            ticker: "INFY",
            company: "Infosys Limited",
            current_price: 1543.20,
            change: -1.12,
            advice: AdviceKind::Buy,
            reason: "IT sector recovery underway with strong deal pipeline. Digital transformation demand remains robust.",
            risk_note: "Currency fluctuation risks persist",
            confidence: 92,
            target_price: Some(1750.0),
            quantity: 100,
        },
        StockAdvice {
            ticker: "HDFCBANK",
            company: "HDFC Bank Ltd",
            current_price: 1675.50,
            change: -0.85,
            advice: AdviceKind::Reduce,
            reason: "Banking sector facing margin pressure due to rising interest rates. Credit growth concerns in retail segment.",
            risk_note: "High market volatility detected",
            confidence: 78,
            target_price: Some(1500.0),
            quantity: 75,
        },
    ]
}

pub fn portfolio_summary() -> PortfolioSummary {
    PortfolioSummary {
        total_value: 245_000,
        recommendation: "Your portfolio shows good diversification across IT and Energy sectors. Consider adding pharma or FMCG stocks for better balance.",
        risk_score: "6.5/10",
        expected_return: "12-15%",
        time_horizon: "1-2 years",
    }
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat {
            name: "Total Portfolio Value",
            value: "₹2,45,000",
            change: "+12.5%",
            trend: Trend::Up,
        },
        DashboardStat {
            name: "Monthly Return",
            value: "+8.2%",
            change: "+2.1%",
            trend: Trend::Up,
        },
        DashboardStat {
            name: "Active Stocks",
            value: "24",
            change: "+3",
            trend: Trend::Up,
        },
        DashboardStat {
            name: "Risk Score",
            value: "6.5/10",
            change: "-0.5",
            trend: Trend::Down,
        },
    ]
}

pub fn recent_advice() -> Vec<RecentAdvice> {
    vec![
        RecentAdvice {
            stock: "Reliance Industries",
            ticker: "RELIANCE",
            advice: AdviceKind::Hold,
            reason: "Strong quarterly results expected",
            confidence: 85,
        },
        RecentAdvice {
            stock: "Infosys",
            ticker: "INFY",
            advice: AdviceKind::Buy,
            reason: "IT sector showing recovery signs",
            confidence: 92,
        },
        RecentAdvice {
            stock: "HDFC Bank",
            ticker: "HDFCBANK",
            advice: AdviceKind::Reduce,
            reason: "Banking sector facing headwinds",
            confidence: 78,
        },
    ]
}

/// Number of portfolios shown on the dashboard
pub const DASHBOARD_PORTFOLIO_COUNT: u32 = 3;

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::Basic,
            name: "Basic",
            price: 99,
            period: "month",
            features: &[
                "5 portfolio analyses per month",
                "Basic stock recommendations",
                "Email support",
                "Mobile app access",
            ],
            recommended: false,
        },
        Plan {
            id: PlanId::Premium,
            name: "Premium",
            price: 299,
            period: "month",
            features: &[
                "Unlimited portfolio analyses",
                "Advanced AI recommendations",
                "Real-time market alerts",
                "Priority support",
                "Detailed risk analysis",
                "Export reports (PDF/CSV)",
            ],
            recommended: true,
        },
        Plan {
            id: PlanId::Enterprise,
            name: "Enterprise",
            price: 999,
            period: "month",
            features: &[
                "Everything in Premium",
                "Multi-portfolio management",
                "Custom risk models",
                "API access",
                "Dedicated account manager",
                "White-label solutions",
            ],
            recommended: false,
        },
    ]
}

pub fn plan(id: PlanId) -> Option<Plan> {
    plans().into_iter().find(|plan| plan.id == id)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1",
            date: date(2024, 1, 15),
            amount: 299,
            description: "Premium Plan - Monthly",
            status: TransactionStatus::Paid,
        },
        Transaction {
            id: "2",
            date: date(2023, 12, 15),
            amount: 299,
            description: "Premium Plan - Monthly",
            status: TransactionStatus::Paid,
        },
        Transaction {
            id: "3",
            date: date(2023, 11, 15),
            amount: 299,
            description: "Premium Plan - Monthly",
            status: TransactionStatus::Paid,
        },
    ]
}

pub fn usage_quota() -> UsageQuota {
    UsageQuota {
        used: 7,
        limit: 10,
        reset_date: date(2024, 2, 1),
    }
}
