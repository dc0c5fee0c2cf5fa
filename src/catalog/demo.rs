//! Built-in demo data set.

use super::{Agent, AgentPosition, AgentStatus, Asset, AssetPnl, Catalog, HistoryEntry};
use super::{Category, Direction, MarketStatus, PredictionMarket, PricePoint, PriceSeries};
use super::{Trade, TradeStatus};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const HOURS: [&str; 8] = [
    "18:00", "19:00", "20:00", "21:00", "22:00", "23:00", "00:00", "01:00",
];

/// The five-agent, five-asset arena shipped with the binary.
pub fn catalog() -> Catalog {
    Catalog {
        agents: agents(),
        assets: assets(),
        history: history(),
        markets: markets(),
        trades: trades(),
    }
}

fn series(prices: &[Decimal], volumes: &[Decimal]) -> PriceSeries {
    PriceSeries::new(
        HOURS
            .iter()
            .zip(prices)
            .enumerate()
            .map(|(i, (time, price))| {
                PricePoint::new(*time, *price, volumes.get(i).copied().unwrap_or_default())
            })
            .collect(),
    )
}

fn positions(legs: [(&str, Decimal, Decimal); 3]) -> Vec<AgentPosition> {
    legs.into_iter()
        .map(|(asset, amount, pnl)| AgentPosition {
            asset: asset.to_string(),
            amount,
            pnl,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn agent(
    id: &str,
    name: &str,
    pnl: Decimal,
    pnl_percent: Decimal,
    win_rate: Decimal,
    volume: Decimal,
    strategy: &str,
    legs: [(&str, Decimal, Decimal); 3],
    curve: &[Decimal],
) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        pnl,
        pnl_percent,
        status: AgentStatus::Active,
        portfolio: dec!(100000),
        win_rate,
        volume,
        strategy: strategy.to_string(),
        positions: positions(legs),
        portfolio_curve: series(curve, &[]),
    }
}

fn agents() -> Vec<Agent> {
    vec![
        agent(
            "1",
            "QuantumTrader AI",
            dec!(2850.75),
            dec!(2.85),
            dec!(72.3),
            dec!(285430.50),
            "Technical Analysis + Mean Reversion (5x Leverage)",
            [
                ("BTC", dec!(35000), dec!(1205.30)),
                ("SOL", dec!(30000), dec!(890.45)),
                ("ETH", dec!(35000), dec!(755.00)),
            ],
            &[
                dec!(100000),
                dec!(100500),
                dec!(101200),
                dec!(101800),
                dec!(102200),
                dec!(102600),
                dec!(102850),
            ],
        ),
        agent(
            "2",
            "ArbitrageHunter Pro",
            dec!(1456.20),
            dec!(1.46),
            dec!(68.7),
            dec!(412350.75),
            "Cross-Exchange Arbitrage (3x Leverage)",
            [
                ("BTC", dec!(40000), dec!(680.15)),
                ("SOL", dec!(25000), dec!(456.80)),
                ("ETH", dec!(35000), dec!(319.25)),
            ],
            &[
                dec!(100000),
                dec!(100200),
                dec!(100800),
                dec!(101200),
                dec!(101400),
                dec!(101300),
                dec!(101456),
            ],
        ),
        agent(
            "3",
            "TrendFollower Alpha",
            dec!(850.40),
            dec!(0.85),
            dec!(64.2),
            dec!(195680.30),
            "Momentum & Trend Following (10x Leverage)",
            [
                ("BTC", dec!(45000), dec!(425.60)),
                ("SOL", dec!(20000), dec!(180.25)),
                ("ETH", dec!(35000), dec!(244.55)),
            ],
            &[
                dec!(100000),
                dec!(100150),
                dec!(100300),
                dec!(100600),
                dec!(100750),
                dec!(100800),
                dec!(100850),
            ],
        ),
        agent(
            "4",
            "RiskParity Bot",
            dec!(-320.85),
            dec!(-0.32),
            dec!(58.9),
            dec!(156780.90),
            "Risk Parity & Volatility Targeting (2x Leverage)",
            [
                ("BTC", dec!(33333), dec!(-145.20)),
                ("SOL", dec!(33333), dec!(-85.65)),
                ("ETH", dec!(33334), dec!(-90.00)),
            ],
            &[
                dec!(100000),
                dec!(99950),
                dec!(99800),
                dec!(99700),
                dec!(99650),
                dec!(99600),
                dec!(99679),
            ],
        ),
        agent(
            "5",
            "DeepLearning Trader",
            dec!(-890.50),
            dec!(-0.89),
            dec!(55.4),
            dec!(234560.40),
            "Neural Networks & Pattern Recognition (8x Leverage)",
            [
                ("BTC", dec!(42000), dec!(-425.30)),
                ("SOL", dec!(28000), dec!(-265.90)),
                ("ETH", dec!(30000), dec!(-199.30)),
            ],
            &[
                dec!(100000),
                dec!(99800),
                dec!(99500),
                dec!(99300),
                dec!(99200),
                dec!(99100),
                dec!(99105),
            ],
        ),
    ]
}

fn asset(
    symbol: &str,
    name: &str,
    price: Decimal,
    change: Decimal,
    change_percent: Decimal,
    series: PriceSeries,
) -> Asset {
    Asset {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        series,
    }
}

fn assets() -> Vec<Asset> {
    vec![
        asset(
            "BTC",
            "Bitcoin",
            dec!(87516.52),
            dec!(39.03),
            dec!(0.045),
            series(
                &[
                    dec!(86750),
                    dec!(86250),
                    dec!(87500),
                    dec!(86800),
                    dec!(87200),
                    dec!(86900),
                    dec!(87350),
                    dec!(87516),
                ],
                &[
                    dec!(45),
                    dec!(120),
                    dec!(85),
                    dec!(95),
                    dec!(110),
                    dec!(75),
                    dec!(90),
                    dec!(65),
                ],
            ),
        ),
        asset(
            "ETH",
            "Ethereum",
            dec!(3341.28),
            dec!(96.28),
            dec!(2.97),
            series(
                &[
                    dec!(3245),
                    dec!(3189),
                    dec!(3298),
                    dec!(3267),
                    dec!(3312),
                    dec!(3289),
                    dec!(3325),
                    dec!(3341),
                ],
                &[
                    dec!(1200),
                    dec!(1580),
                    dec!(980),
                    dec!(1100),
                    dec!(1350),
                    dec!(890),
                    dec!(1020),
                    dec!(750),
                ],
            ),
        ),
        asset(
            "SOL",
            "Solana",
            dec!(196.75),
            dec!(9.30),
            dec!(4.96),
            series(
                &[
                    dec!(187.45),
                    dec!(184.22),
                    dec!(191.80),
                    dec!(188.95),
                    dec!(193.25),
                    dec!(190.10),
                    dec!(194.60),
                    dec!(196.75),
                ],
                &[
                    dec!(2800),
                    dec!(3200),
                    dec!(2100),
                    dec!(2600),
                    dec!(2950),
                    dec!(2200),
                    dec!(2400),
                    dec!(1850),
                ],
            ),
        ),
        asset(
            "XRP",
            "XRP",
            dec!(0.67),
            dec!(0.05),
            dec!(8.06),
            series(
                &[
                    dec!(0.62),
                    dec!(0.61),
                    dec!(0.64),
                    dec!(0.63),
                    dec!(0.65),
                    dec!(0.63),
                    dec!(0.66),
                    dec!(0.67),
                ],
                &[
                    dec!(15000),
                    dec!(18000),
                    dec!(12000),
                    dec!(14000),
                    dec!(16000),
                    dec!(11000),
                    dec!(13000),
                    dec!(9500),
                ],
            ),
        ),
        asset(
            "BNB",
            "BNB",
            dec!(314.25),
            dec!(16.25),
            dec!(5.45),
            series(
                &[
                    dec!(298),
                    dec!(295),
                    dec!(305),
                    dec!(302),
                    dec!(308),
                    dec!(304),
                    dec!(311),
                    dec!(314),
                ],
                &[
                    dec!(5000),
                    dec!(6200),
                    dec!(4100),
                    dec!(5600),
                    dec!(5950),
                    dec!(4200),
                    dec!(4800),
                    dec!(3850),
                ],
            ),
        ),
    ]
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 29)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn at_hour(hour: u32) -> NaiveDateTime {
    at(hour, 0)
}

fn legs(values: [(&str, Decimal, u32); 5]) -> Vec<AssetPnl> {
    values
        .into_iter()
        .map(|(asset, pnl, leverage)| AssetPnl {
            asset: asset.to_string(),
            pnl,
            leverage,
        })
        .collect()
}

fn history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            time: at_hour(11),
            legs: legs([
                ("BTC", dec!(800), 5),
                ("ETH", dec!(300), 3),
                ("SOL", dec!(-500), 2),
                ("XRP", dec!(200), 4),
                ("BNB", dec!(-100), 3),
            ]),
        },
        HistoryEntry {
            time: at_hour(12),
            legs: legs([
                ("BTC", dec!(1500), 5),
                ("ETH", dec!(300), 3),
                ("SOL", dec!(-800), 2),
                ("XRP", dec!(600), 4),
                ("BNB", dec!(200), 3),
            ]),
        },
        HistoryEntry {
            time: at_hour(13),
            legs: legs([
                ("BTC", dec!(2000), 5),
                ("ETH", dec!(1000), 3),
                ("SOL", dec!(-1000), 2),
                ("XRP", dec!(1428), 4),
                ("BNB", dec!(0), 3),
            ]),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn market(
    id: &str,
    question: &str,
    time_left: &str,
    yes_price: Decimal,
    volume: Decimal,
    participants: u32,
    category: Category,
    agent: Option<&str>,
) -> PredictionMarket {
    PredictionMarket {
        id: id.to_string(),
        question: question.to_string(),
        status: MarketStatus::Open,
        time_left: time_left.to_string(),
        yes_price,
        no_price: Decimal::ONE_HUNDRED - yes_price,
        volume,
        participants,
        category,
        agent: agent.map(str::to_string),
    }
}

const AGENT_KEYS: [(&str, &str); 5] = [
    ("alpha", "QuantumTrader AI"),
    ("beta", "ArbitrageHunter Pro"),
    ("gamma", "TrendFollower Alpha"),
    ("delta", "RiskParity Bot"),
    ("epsilon", "DeepLearning Trader"),
];

/// One market per agent for a multi-agent question.
fn options(
    prefix: &str,
    question: &str,
    time_left: &str,
    participants: u32,
    category: Category,
    quotes: [(Decimal, Decimal); 5],
) -> impl Iterator<Item = PredictionMarket> {
    AGENT_KEYS
        .into_iter()
        .zip(quotes)
        .map(move |((key, agent), (yes, volume))| {
            market(
                &format!("{prefix}-{key}"),
                question,
                time_left,
                yes,
                volume,
                participants,
                category,
                Some(agent),
            )
        })
}

fn markets() -> Vec<PredictionMarket> {
    let mut markets = vec![
        market(
            "1",
            "Will QuantumTrader AI finish in Top 3?",
            "2h 34m",
            dec!(65),
            dec!(3400),
            127,
            Category::Performance,
            None,
        ),
        market(
            "2",
            "Will ArbitrageHunter Pro get liquidated?",
            "5h 12m",
            dec!(23),
            dec!(1850),
            89,
            Category::Risk,
            None,
        ),
        market(
            "3",
            "Will TrendFollower Alpha return over 10%?",
            "1h 45m",
            dec!(42),
            dec!(2200),
            156,
            Category::Returns,
            None,
        ),
    ];
    markets.extend(options(
        "multi-1",
        "Which agents will finish in Top 3?",
        "3h 15m",
        89,
        Category::Performance,
        [
            (dec!(45), dec!(2100)),
            (dec!(32), dec!(1800)),
            (dec!(28), dec!(1600)),
            (dec!(18), dec!(1200)),
            (dec!(15), dec!(900)),
        ],
    ));
    markets.extend(options(
        "multi-2",
        "Who finishes with the highest PnL?",
        "4h 22m",
        156,
        Category::Returns,
        [
            (dec!(28), dec!(1800)),
            (dec!(24), dec!(1500)),
            (dec!(22), dec!(1400)),
            (dec!(20), dec!(1300)),
            (dec!(16), dec!(1100)),
        ],
    ));
    markets
}

/// Trade fields after agent and time: asset, direction, leverage, entry,
/// exit, size, margin, pnl, status, minutes held.
type TradeRow<'a> = (
    &'a str,
    Direction,
    u32,
    Decimal,
    Option<Decimal>,
    Decimal,
    Decimal,
    Decimal,
    TradeStatus,
    Option<u32>,
);

fn trade(agent: &str, time: NaiveDateTime, row: TradeRow<'_>) -> Trade {
    let (asset, direction, leverage, entry_price, exit_price, size, margin, pnl, status, mins) =
        row;
    Trade {
        agent: agent.to_string(),
        time,
        asset: asset.to_string(),
        direction,
        leverage,
        entry_price,
        exit_price,
        size,
        margin,
        pnl,
        status,
        duration_mins: mins,
    }
}

#[rustfmt::skip]
fn trades() -> Vec<Trade> {
    use Direction::{Long, Short};
    use TradeStatus::{Closed, Liquidated, Open};

    let [alpha, beta, gamma, delta, epsilon] = AGENT_KEYS.map(|(_, name)| name);
    vec![
        trade(alpha, at(14, 32), ("BTC", Long, 5, dec!(58000), Some(dec!(59500)), dec!(20000), dec!(4000), dec!(1500), Closed, Some(83))),
        trade(alpha, at(13, 10), ("ETH", Short, 3, dec!(3400), None, dec!(15000), dec!(5000), dec!(0), Open, None)),
        trade(alpha, at(12, 0), ("SOL", Long, 10, dec!(120), Some(dec!(110)), dec!(10000), dec!(1000), dec!(-1000), Liquidated, Some(45))),
        trade(beta, at(15, 45), ("BTC", Short, 2, dec!(60000), Some(dec!(58200)), dec!(25000), dec!(12500), dec!(2250), Closed, Some(135))),
        trade(beta, at(14, 20), ("ETH", Long, 4, dec!(3350), None, dec!(18000), dec!(4500), dec!(0), Open, None)),
        trade(gamma, at(16, 10), ("BTC", Long, 3, dec!(59200), Some(dec!(61000)), dec!(30000), dec!(10000), dec!(1800), Closed, Some(110))),
        trade(gamma, at(15, 0), ("SOL", Short, 8, dec!(125), Some(dec!(115)), dec!(16000), dec!(2000), dec!(1280), Closed, Some(35))),
        trade(delta, at(17, 30), ("ETH", Long, 6, dec!(3300), Some(dec!(3450)), dec!(22000), dec!(3667), dec!(2000), Closed, Some(70))),
        trade(delta, at(16, 45), ("BTC", Short, 4, dec!(60500), None, dec!(28000), dec!(7000), dec!(0), Open, None)),
        trade(epsilon, at(18, 0), ("SOL", Long, 12, dec!(118), Some(dec!(122)), dec!(12000), dec!(1000), dec!(400), Closed, Some(25))),
        trade(epsilon, at(17, 15), ("ETH", Short, 5, dec!(3380), Some(dec!(3420)), dec!(20000), dec!(4000), dec!(-800), Liquidated, Some(20))),
    ]
}
