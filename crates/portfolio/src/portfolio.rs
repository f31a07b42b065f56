// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2026 Meridian Markets Pty Ltd. All rights reserved.
//  https://meridianmarkets.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The multi-venue portfolio exposure engine.

use ahash::AHashMap;
use meridian_model::{
    accounts::{Account, AccountAny, MarginAccount},
    data::QuoteTick,
    events::{OrderEvent, PositionEvent},
    identifiers::{ClientOrderId, InstrumentId, PositionId, Venue},
    instruments::{Instrument, InstrumentAny},
    orders::WorkingOrder,
    position::Position,
    types::{Currency, Money, Price, Quantity},
};
use rust_decimal::Decimal;

use crate::xrate::ExchangeRateProvider;

/// Provides an authoritative, incrementally-updated exposure view across venues.
///
/// One account is bound per venue. On every relevant order or position change the
/// required margin for that venue is re-summed in full over the current working
/// orders / open positions and pushed into the venue's margin account, so the
/// roll-up is idempotent and immune to missed intermediate deltas.
pub struct Portfolio {
    instruments: AHashMap<InstrumentId, InstrumentAny>,
    ticks: AHashMap<InstrumentId, QuoteTick>,
    mark_bids: AHashMap<InstrumentId, Price>,
    mark_asks: AHashMap<InstrumentId, Price>,
    accounts: AHashMap<Venue, AccountAny>,
    orders_working: AHashMap<Venue, AHashMap<ClientOrderId, WorkingOrder>>,
    positions_open: AHashMap<Venue, AHashMap<PositionId, Position>>,
    positions_closed: AHashMap<Venue, AHashMap<PositionId, Position>>,
    xrate_provider: Box<dyn ExchangeRateProvider>,
}

impl Portfolio {
    /// Creates a new [`Portfolio`] instance.
    #[must_use]
    pub fn new(xrate_provider: Box<dyn ExchangeRateProvider>) -> Self {
        Self {
            instruments: AHashMap::new(),
            ticks: AHashMap::new(),
            mark_bids: AHashMap::new(),
            mark_asks: AHashMap::new(),
            accounts: AHashMap::new(),
            orders_working: AHashMap::new(),
            positions_open: AHashMap::new(),
            positions_closed: AHashMap::new(),
            xrate_provider,
        }
    }

    /// Binds the account to its issuing venue, overwriting any prior binding.
    pub fn register_account(&mut self, account: AccountAny) {
        let venue = account.id().issuer();
        log::info!("Registered account {} for venue {venue}", account.id());
        self.accounts.insert(venue, account);
    }

    /// Returns the account registered for the venue, if any.
    #[must_use]
    pub fn account(&self, venue: &Venue) -> Option<&AccountAny> {
        self.accounts.get(venue)
    }

    /// Caches the instrument definition, replacing any prior version.
    pub fn update_instrument(&mut self, instrument: InstrumentAny) {
        self.instruments.insert(instrument.id(), instrument);
    }

    /// Caches the quote and refreshes the best-bid/best-ask marks.
    pub fn update_tick(&mut self, tick: QuoteTick) {
        self.mark_bids.insert(tick.instrument_id, tick.bid);
        self.mark_asks.insert(tick.instrument_id, tick.ask);
        self.ticks.insert(tick.instrument_id, tick);
    }

    /// Replaces the venue's working-order set and re-sums its order margin.
    pub fn update_orders_working(&mut self, venue: Venue, orders: Vec<WorkingOrder>) {
        let working = orders
            .into_iter()
            .map(|order| (order.client_order_id, order))
            .collect();
        self.orders_working.insert(venue, working);
        self.update_order_margin(&venue);
    }

    /// Applies a working-order state transition and re-sums the venue's order
    /// margin.
    pub fn update_order(&mut self, event: &OrderEvent) {
        let venue = event.venue();
        match event {
            OrderEvent::Working(order) => {
                self.orders_working
                    .entry(venue)
                    .or_default()
                    .insert(order.client_order_id, *order);
            }
            OrderEvent::Completed {
                client_order_id, ..
            } => {
                if let Some(orders) = self.orders_working.get_mut(&venue) {
                    orders.remove(client_order_id);
                }
            }
        }
        self.update_order_margin(&venue);
    }

    /// Replaces the venue's position sets, splitting open from closed, and
    /// re-sums its position margin.
    pub fn update_positions(&mut self, venue: Venue, positions: Vec<Position>) {
        let mut open = AHashMap::new();
        let mut closed = AHashMap::new();
        for position in positions {
            if position.is_open() {
                open.insert(position.id, position);
            } else {
                closed.insert(position.id, position);
            }
        }
        self.positions_open.insert(venue, open);
        self.positions_closed.insert(venue, closed);
        self.update_position_margin(&venue);
    }

    /// Applies a position lifecycle event and re-sums the venue's position
    /// margin.
    pub fn update_position(&mut self, event: &PositionEvent) {
        let venue = event.venue();
        match event {
            PositionEvent::Opened(position) | PositionEvent::Modified(position) => {
                self.positions_open
                    .entry(venue)
                    .or_default()
                    .insert(position.id, position.clone());
            }
            PositionEvent::Closed(position) => {
                if let Some(positions) = self.positions_open.get_mut(&venue) {
                    positions.remove(&position.id);
                }
                self.positions_closed
                    .entry(venue)
                    .or_default()
                    .insert(position.id, position.clone());
            }
        }
        self.update_position_margin(&venue);
    }

    /// Clears all cached market data, orders and positions. Registered accounts
    /// and instrument definitions survive.
    pub fn reset(&mut self) {
        log::info!("Resetting portfolio");
        self.ticks.clear();
        self.mark_bids.clear();
        self.mark_asks.clear();
        self.orders_working.clear();
        self.positions_open.clear();
        self.positions_closed.clear();
    }

    /// Returns the venue's current initial (order) margin requirement in the
    /// account base currency, or `None` if unavailable.
    #[must_use]
    pub fn order_margin(&self, venue: &Venue) -> Option<Money> {
        self.margin_account(venue)
            .and_then(|account| account.margin_init(Some(account.base_currency()?)))
    }

    /// Returns the venue's current maintenance (position) margin requirement in
    /// the account base currency, or `None` if unavailable.
    #[must_use]
    pub fn position_margin(&self, venue: &Venue) -> Option<Money> {
        self.margin_account(venue)
            .and_then(|account| account.margin_maint(Some(account.base_currency()?)))
    }

    /// Returns the sum of each open position's unrealized PnL at the current
    /// mark, converted into the venue account's base currency.
    ///
    /// Longs are marked at the best bid, shorts at the best ask. Returns `None`
    /// (logged) when the account, its base currency, a mark price or an exchange
    /// rate is unavailable.
    #[must_use]
    pub fn unrealized_pnl(&self, venue: &Venue) -> Option<Money> {
        let base_currency = self.base_currency_for(venue)?;
        let mut total = Decimal::ZERO;
        if let Some(positions) = self.positions_open.get(venue) {
            for position in positions.values() {
                let mark = self.mark_price(position)?;
                total += self.convert(position.unrealized_pnl(mark), base_currency)?;
            }
        }
        Some(Money::from_decimal(total, base_currency))
    }

    /// Returns the sum of each open position's notional value at the current
    /// mark, converted into the venue account's base currency.
    ///
    /// Same marking and availability rules as [`Self::unrealized_pnl`].
    #[must_use]
    pub fn open_value(&self, venue: &Venue) -> Option<Money> {
        let base_currency = self.base_currency_for(venue)?;
        let mut total = Decimal::ZERO;
        if let Some(positions) = self.positions_open.get(venue) {
            for position in positions.values() {
                let mark = self.mark_price(position)?;
                total += self.convert(position.notional_value(mark), base_currency)?;
            }
        }
        Some(Money::from_decimal(total, base_currency))
    }

    fn margin_account(&self, venue: &Venue) -> Option<&MarginAccount> {
        match self.accounts.get(venue) {
            Some(AccountAny::Margin(account)) => Some(account),
            Some(AccountAny::Cash(_)) => {
                log::warn!("No margin tracked for venue {venue}: cash account registered");
                None
            }
            None => {
                log::warn!("No account registered for venue {venue}");
                None
            }
        }
    }

    fn base_currency_for(&self, venue: &Venue) -> Option<Currency> {
        let Some(account) = self.accounts.get(venue) else {
            log::warn!("No account registered for venue {venue}");
            return None;
        };
        let base_currency = account.base_currency();
        if base_currency.is_none() {
            log::warn!("Account for venue {venue} has no base currency");
        }
        base_currency
    }

    /// Longs are marked at the best bid, shorts at the best ask.
    fn mark_price(&self, position: &Position) -> Option<Price> {
        let mark = if position.is_short() {
            self.mark_asks.get(&position.instrument_id)
        } else {
            self.mark_bids.get(&position.instrument_id)
        };
        if mark.is_none() {
            log::warn!("No mark price cached for {}", position.instrument_id);
        }
        mark.copied()
    }

    fn convert(&self, money: Money, currency: Currency) -> Option<Decimal> {
        if money.currency == currency {
            return Some(money.as_decimal());
        }
        let Some(rate) = self.xrate_provider.rate(money.currency, currency) else {
            log::warn!(
                "No exchange rate available from {} to {}",
                money.currency,
                currency,
            );
            return None;
        };
        Some(money.as_decimal() * rate)
    }

    /// Re-sums the venue's initial margin over its current working orders and
    /// pushes the per-currency totals into the margin account. Stale entries are
    /// overwritten with zero; a venue bound to a cash account is skipped.
    fn update_order_margin(&mut self, venue: &Venue) {
        if self.margin_account(venue).is_none() {
            return;
        }
        let mut inputs: Vec<(InstrumentAny, Quantity, Price)> = Vec::new();
        if let Some(orders) = self.orders_working.get(venue) {
            for order in orders.values() {
                match self.instruments.get(&order.instrument_id) {
                    Some(instrument) => {
                        inputs.push((instrument.clone(), order.quantity, order.price));
                    }
                    None => log::error!(
                        "Cannot calculate order margin: no instrument cached for {}",
                        order.instrument_id,
                    ),
                }
            }
        }
        let Some(AccountAny::Margin(account)) = self.accounts.get_mut(venue) else {
            return;
        };
        let mut margins: AHashMap<Currency, Decimal> = AHashMap::new();
        for (instrument, quantity, price) in inputs {
            let margin = account.calculate_initial_margin(&instrument, quantity, price, None);
            *margins.entry(margin.currency).or_default() += margin.as_decimal();
        }
        Self::push_margins(&mut margins, account, true);
    }

    /// Re-sums the venue's maintenance margin over its current open positions at
    /// the current mark. Same push semantics as the order margin roll-up.
    fn update_position_margin(&mut self, venue: &Venue) {
        if self.margin_account(venue).is_none() {
            return;
        }
        let mut inputs = Vec::new();
        if let Some(positions) = self.positions_open.get(venue) {
            for position in positions.values() {
                let Some(instrument) = self.instruments.get(&position.instrument_id) else {
                    log::error!(
                        "Cannot calculate position margin: no instrument cached for {}",
                        position.instrument_id,
                    );
                    continue;
                };
                let Some(mark) = self.mark_price(position) else {
                    continue;
                };
                inputs.push((instrument.clone(), position.side, position.quantity, mark));
            }
        }
        let Some(AccountAny::Margin(account)) = self.accounts.get_mut(venue) else {
            return;
        };
        let mut margins: AHashMap<Currency, Decimal> = AHashMap::new();
        for (instrument, side, quantity, mark) in inputs {
            let margin = account.calculate_maint_margin(&instrument, side, quantity, mark, None);
            *margins.entry(margin.currency).or_default() += margin.as_decimal();
        }
        Self::push_margins(&mut margins, account, false);
    }

    /// Pushes re-summed totals into the account, zeroing entries with no
    /// remaining contribution so an emptied venue reads as zero, not stale.
    fn push_margins(
        margins: &mut AHashMap<Currency, Decimal>,
        account: &mut MarginAccount,
        initial: bool,
    ) {
        if margins.is_empty()
            && let Some(base_currency) = account.base_currency()
        {
            margins.insert(base_currency, Decimal::ZERO);
        }
        let existing = if initial {
            account.margins_init()
        } else {
            account.margins_maint()
        };
        for currency in existing.keys() {
            margins.entry(*currency).or_insert(Decimal::ZERO);
        }
        for (currency, total) in margins.drain() {
            let margin = Money::from_decimal(total, currency);
            if initial {
                account.update_initial_margin(margin);
            } else {
                account.update_maint_margin(margin);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ahash::AHashMap;
    use meridian_model::{
        accounts::CashAccount,
        enums::{AccountType, OrderSide},
        events::AccountState,
        identifiers::{AccountId, ClientOrderId, PositionId, stubs::uuid4},
        instruments::stubs::*,
        types::AccountBalance,
    };
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    use super::*;

    /// A fixed-rate provider: identity for equal currencies, table lookup
    /// otherwise.
    struct TestRateProvider {
        rates: AHashMap<(Currency, Currency), Decimal>,
    }

    impl TestRateProvider {
        fn empty() -> Self {
            Self {
                rates: AHashMap::new(),
            }
        }

        fn with_rate(from: Currency, to: Currency, rate: Decimal) -> Self {
            let mut rates = AHashMap::new();
            rates.insert((from, to), rate);
            Self { rates }
        }
    }

    impl ExchangeRateProvider for TestRateProvider {
        fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
            if from == to {
                return Some(Decimal::ONE);
            }
            self.rates.get(&(from, to)).copied()
        }
    }

    fn margin_account_state(account_id: &str) -> AccountState {
        AccountState::new(
            AccountId::from(account_id),
            AccountType::Margin,
            Some(Currency::USD()),
            vec![AccountBalance::new(
                Money::from("1000000 USD"),
                Money::from("0 USD"),
                Money::from("1000000 USD"),
            )],
            AHashMap::new(),
            uuid4(),
            0,
            0,
        )
    }

    fn cash_account_state(account_id: &str) -> AccountState {
        AccountState::new(
            AccountId::from(account_id),
            AccountType::Cash,
            Some(Currency::USD()),
            vec![AccountBalance::new(
                Money::from("1000000 USD"),
                Money::from("0 USD"),
                Money::from("1000000 USD"),
            )],
            AHashMap::new(),
            uuid4(),
            0,
            0,
        )
    }

    fn working_order(id: &str, instrument: &InstrumentAny, qty: &str, px: &str) -> WorkingOrder {
        WorkingOrder::new(
            ClientOrderId::from(id),
            instrument.id(),
            OrderSide::Buy,
            Quantity::from(qty),
            Price::from(px),
        )
    }

    fn open_position(
        id: &str,
        instrument: &InstrumentAny,
        entry: OrderSide,
        qty: &str,
        px: &str,
    ) -> Position {
        Position::new(
            PositionId::from(id),
            instrument,
            entry,
            Quantity::from(qty),
            Price::from(px),
            0,
        )
    }

    #[fixture]
    fn portfolio() -> Portfolio {
        let mut portfolio = Portfolio::new(Box::new(TestRateProvider::empty()));
        portfolio.register_account(
            AccountAny::create(margin_account_state("SIM-001")).unwrap(),
        );
        portfolio.update_instrument(audusd_sim().into_any());
        portfolio.update_instrument(gbpusd_sim().into_any());
        portfolio
    }

    #[rstest]
    fn register_account_binds_by_issuer(portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let account = portfolio.account(&venue).unwrap();
        assert_eq!(account.id(), AccountId::from("SIM-001"));
        assert!(portfolio.account(&Venue::from("BITMEX")).is_none());
    }

    #[rstest]
    fn register_account_overwrites_prior_binding(mut portfolio: Portfolio) {
        portfolio.register_account(
            AccountAny::create(margin_account_state("SIM-002")).unwrap(),
        );
        let account = portfolio.account(&Venue::from("SIM")).unwrap();
        assert_eq!(account.id(), AccountId::from("SIM-002"));
    }

    #[rstest]
    fn order_margin_rolls_up_working_orders(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_orders_working(
            venue,
            vec![
                working_order("O-1", &instrument, "100000", "0.80000"),
                working_order("O-2", &instrument, "100000", "0.80000"),
            ],
        );
        // 2 * (80000 * 0.03 + 80000 * 0.00002 * 2)
        assert_eq!(
            portfolio.order_margin(&venue),
            Some(Money::from("4806.40 USD")),
        );
    }

    #[rstest]
    fn order_margin_roll_up_is_idempotent(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        let orders = vec![working_order("O-1", &instrument, "100000", "0.80000")];
        portfolio.update_orders_working(venue, orders.clone());
        let first = portfolio.order_margin(&venue);
        portfolio.update_orders_working(venue, orders);
        assert_eq!(portfolio.order_margin(&venue), first);
        assert_eq!(first, Some(Money::from("2403.20 USD")));
    }

    #[rstest]
    fn emptied_order_set_zeroes_margin(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_orders_working(
            venue,
            vec![working_order("O-1", &instrument, "100000", "0.80000")],
        );
        portfolio.update_orders_working(venue, vec![]);
        assert_eq!(portfolio.order_margin(&venue), Some(Money::from("0 USD")));
    }

    #[rstest]
    fn completed_order_event_removes_from_roll_up(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        let order = working_order("O-1", &instrument, "100000", "0.80000");
        portfolio.update_order(&OrderEvent::Working(order));
        assert_eq!(
            portfolio.order_margin(&venue),
            Some(Money::from("2403.20 USD")),
        );

        portfolio.update_order(&OrderEvent::Completed {
            client_order_id: order.client_order_id,
            instrument_id: order.instrument_id,
        });
        assert_eq!(portfolio.order_margin(&venue), Some(Money::from("0 USD")));
    }

    #[rstest]
    fn cash_account_venue_skips_margin_roll_up() {
        let mut portfolio = Portfolio::new(Box::new(TestRateProvider::empty()));
        portfolio.register_account(AccountAny::Cash(CashAccount::new(cash_account_state(
            "SIM-001",
        ))));
        portfolio.update_instrument(audusd_sim().into_any());
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_orders_working(
            venue,
            vec![working_order("O-1", &instrument, "100000", "0.80000")],
        );
        assert_eq!(portfolio.order_margin(&venue), None);
        assert_eq!(portfolio.position_margin(&venue), None);
    }

    #[rstest]
    fn position_margin_marks_at_current_quote(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_tick(QuoteTick::new(
            instrument.id(),
            Price::from("0.80100"),
            Price::from("0.80110"),
            0,
        ));
        let position = open_position("P-1", &instrument, OrderSide::Buy, "100000", "0.80000");
        portfolio.update_position(&PositionEvent::Opened(position));
        // long marked at bid: 80100 * 0.03 + 80100 * 0.00002
        assert_eq!(
            portfolio.position_margin(&venue),
            Some(Money::from("2404.60 USD")),
        );
    }

    #[rstest]
    fn repeated_modified_event_is_idempotent(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_tick(QuoteTick::new(
            instrument.id(),
            Price::from("0.80100"),
            Price::from("0.80110"),
            0,
        ));
        let position = open_position("P-1", &instrument, OrderSide::Buy, "100000", "0.80000");
        portfolio.update_position(&PositionEvent::Opened(position.clone()));
        let first = portfolio.position_margin(&venue);

        portfolio.update_position(&PositionEvent::Modified(position.clone()));
        portfolio.update_position(&PositionEvent::Modified(position));
        assert_eq!(portfolio.position_margin(&venue), first);
    }

    #[rstest]
    fn closed_position_zeroes_position_margin(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_tick(QuoteTick::new(
            instrument.id(),
            Price::from("0.80100"),
            Price::from("0.80110"),
            0,
        ));
        let position = open_position("P-1", &instrument, OrderSide::Buy, "100000", "0.80000");
        portfolio.update_position(&PositionEvent::Opened(position.clone()));
        assert!(portfolio.position_margin(&venue).unwrap() > Money::from("0 USD"));

        portfolio.update_position(&PositionEvent::Closed(position));
        assert_eq!(
            portfolio.position_margin(&venue),
            Some(Money::from("0 USD")),
        );
    }

    #[rstest]
    fn unrealized_pnl_marks_long_at_bid_and_short_at_ask(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let audusd = audusd_sim().into_any();
        let gbpusd = gbpusd_sim().into_any();
        portfolio.update_tick(QuoteTick::new(
            audusd.id(),
            Price::from("0.80100"),
            Price::from("0.80110"),
            0,
        ));
        portfolio.update_tick(QuoteTick::new(
            gbpusd.id(),
            Price::from("1.30000"),
            Price::from("1.30010"),
            0,
        ));
        portfolio.update_positions(
            venue,
            vec![
                open_position("P-1", &audusd, OrderSide::Buy, "100000", "0.80000"),
                open_position("P-2", &gbpusd, OrderSide::Sell, "100000", "1.30100"),
            ],
        );
        // long: 100000 * (0.80100 - 0.80000) = 100
        // short: -100000 * (1.30010 - 1.30100) = 90
        assert_eq!(
            portfolio.unrealized_pnl(&venue),
            Some(Money::from("190 USD")),
        );
    }

    #[rstest]
    fn unrealized_pnl_requires_mark_price(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_position(&PositionEvent::Opened(open_position(
            "P-1",
            &instrument,
            OrderSide::Buy,
            "100000",
            "0.80000",
        )));
        // no tick cached
        assert_eq!(portfolio.unrealized_pnl(&venue), None);
    }

    #[rstest]
    fn unrealized_pnl_converts_via_rate_provider() {
        let venue = Venue::from("BITMEX");
        let instrument = crypto_perpetual_btcusd().into_any();

        let build = |provider: Box<dyn ExchangeRateProvider>| {
            let mut portfolio = Portfolio::new(provider);
            portfolio.register_account(
                AccountAny::create(margin_account_state("BITMEX-001")).unwrap(),
            );
            portfolio.update_instrument(instrument.clone());
            portfolio.update_tick(QuoteTick::new(
                instrument.id(),
                Price::from("12500"),
                Price::from("12500.5"),
                0,
            ));
            portfolio.update_position(&PositionEvent::Opened(open_position(
                "P-1",
                &instrument,
                OrderSide::Buy,
                "100000",
                "10000",
            )));
            portfolio
        };

        // settles in BTC, account base is USD: no rate, no answer
        let portfolio = build(Box::new(TestRateProvider::empty()));
        assert_eq!(portfolio.unrealized_pnl(&venue), None);

        // 100000 * (1/10000 - 1/12500) = 2 BTC, at 12500 USD/BTC
        let portfolio = build(Box::new(TestRateProvider::with_rate(
            Currency::BTC(),
            Currency::USD(),
            dec!(12500),
        )));
        assert_eq!(
            portfolio.unrealized_pnl(&venue),
            Some(Money::from("25000 USD")),
        );
    }

    #[rstest]
    fn open_value_sums_marked_notionals(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_tick(QuoteTick::new(
            instrument.id(),
            Price::from("0.80100"),
            Price::from("0.80110"),
            0,
        ));
        portfolio.update_position(&PositionEvent::Opened(open_position(
            "P-1",
            &instrument,
            OrderSide::Buy,
            "100000",
            "0.80000",
        )));
        assert_eq!(portfolio.open_value(&venue), Some(Money::from("80100 USD")));
    }

    #[rstest]
    fn empty_venue_aggregates_read_zero(portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        assert_eq!(portfolio.unrealized_pnl(&venue), Some(Money::from("0 USD")));
        assert_eq!(portfolio.open_value(&venue), Some(Money::from("0 USD")));
    }

    #[rstest]
    fn reset_clears_working_state_but_keeps_accounts(mut portfolio: Portfolio) {
        let venue = Venue::from("SIM");
        let instrument = audusd_sim().into_any();
        portfolio.update_tick(QuoteTick::new(
            instrument.id(),
            Price::from("0.80100"),
            Price::from("0.80110"),
            0,
        ));
        portfolio.update_position(&PositionEvent::Opened(open_position(
            "P-1",
            &instrument,
            OrderSide::Buy,
            "100000",
            "0.80000",
        )));
        portfolio.reset();

        assert!(portfolio.account(&venue).is_some());
        assert_eq!(portfolio.unrealized_pnl(&venue), Some(Money::from("0 USD")));
    }
}
