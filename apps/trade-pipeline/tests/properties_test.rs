//! Property tests for the risk check, the stub feed and stage routing.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use trade_pipeline::domain::trade::Recommendation;
use trade_pipeline::{
    ApprovalPort, AutoApproval, MarketDataPort, OrderSide, RiskCheckPort, RiskValidationService,
    Signal, Stage, StaticMarketData, Symbol, TradeState,
};

fn side() -> impl Strategy<Value = OrderSide> {
    prop_oneof![Just(OrderSide::Buy), Just(OrderSide::Sell)]
}

fn price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..100_000).prop_map(Decimal::from)
}

fn symbol() -> impl Strategy<Value = Symbol> {
    "[A-Z]{1,5}".prop_map(Symbol::new)
}

proptest! {
    #[test]
    fn orders_without_stop_fail_risk(
        sym in symbol(),
        side in side(),
        qty in quantity(),
        entry in price(),
        tp in proptest::option::of(price()),
    ) {
        let mut signal = Signal::new(side, qty);
        signal.take_profit = tp;
        let rec = Recommendation::from_signal(sym, &signal, entry);

        let report = RiskValidationService::default().check(&rec);

        prop_assert!(!report.passed);
        prop_assert!(report.reasons.iter().any(|r| r.to_lowercase().contains("stop")));
        prop_assert_eq!(report.limits.max_trade_risk, dec!(100.0));
    }

    #[test]
    fn orders_with_stop_pass_risk(
        sym in symbol(),
        side in side(),
        qty in quantity(),
        entry in price(),
        stop in price(),
    ) {
        let signal = Signal::new(side, qty).with_stop(stop);
        let rec = Recommendation::from_signal(sym, &signal, entry);

        let report = RiskValidationService::default().check(&rec);

        prop_assert!(report.passed);
        prop_assert!(report.reasons.is_empty());
    }

    #[test]
    fn quote_lookup_returns_one_quote_per_symbol(symbols in proptest::collection::vec(symbol(), 0..16)) {
        let quotes = StaticMarketData::new().get_quotes(&symbols).unwrap();

        prop_assert_eq!(quotes.len(), symbols.len());
        for (quote, symbol) in quotes.iter().zip(&symbols) {
            prop_assert_eq!(&quote.symbol, symbol);
            prop_assert_eq!(quote.bid, dec!(100.00));
            prop_assert_eq!(quote.ask, dec!(100.05));
        }
    }

    #[test]
    fn every_route_ends_at_journal(risk_passed in any::<bool>(), approved in any::<bool>()) {
        let mut state = TradeState::new().with_symbol("AAPL");
        let signal = Signal::new(OrderSide::Buy, dec!(1));
        let signal = if risk_passed { signal.with_stop(dec!(99)) } else { signal };
        let rec = Recommendation::from_signal(Symbol::new("AAPL"), &signal, dec!(100.02));
        state.record_risk_report(RiskValidationService::default().check(&rec)).unwrap();
        state.record_approval(approved && AutoApproval.decide(&state)).unwrap();

        let mut visited = vec![Stage::FIRST];
        while let Some(next) = visited.last().unwrap().next(&state) {
            visited.push(next);
            prop_assert!(visited.len() <= 5);
        }

        prop_assert_eq!(visited.last(), Some(&Stage::Journal));
        prop_assert_eq!(visited.contains(&Stage::Exec), risk_passed && approved);
        prop_assert_eq!(visited.contains(&Stage::Approval), risk_passed);
    }
}
