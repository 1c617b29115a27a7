//! Locale string tables.
//!
//! Flat dotted-key to display-text pairs, consumed by the host's message
//! formatter. Keys are stable identifiers shared with the rest of the
//! platform; values are free text, and a few deliberately carry a
//! trailing space because the host concatenates them with a currency or
//! price fragment. Tables are sorted by key so lookup can binary search.

/// Portuguese messages, the platform's default locale.
pub static PT: &[(&str, &str)] = &[
    ("page.body.airdropCoin.claim.msg.fail", "Claim fail"),
    ("page.body.airdropCoin.claim.msg.success", "Claim success"),
    (
        "page.body.trade.header.newOrder.content.buyWith",
        "Utilizará seu saldo em ",
    ),
    ("page.body.trade.header.newOrder.content.title.buy", "Comprar"),
    ("page.body.trade.header.newOrder.content.title.sell", "Vender"),
    ("page.body.trade.header.orderHistory", "Histórico de ordens"),
    ("page.body.trade.tab.marketTrades", "Histórico de negociação"),
    ("page.body.trade.tab.myTrades", "Ordens executadas"),
    (
        "page.body.trading.header.orderBook.header.title.amount",
        "Montante",
    ),
    (
        "page.body.trading.header.orderBook.header.title.price",
        "Preço ",
    ),
    (
        "page.body.trading.header.orderBook.header.title.sum",
        "Vol financeiro",
    ),
    ("page.body.user.loggin", "Entrar"),
    ("page.body.user.register", "Criar conta"),
    ("page.body.vote.msg.fail", "Vote fail"),
    ("page.body.vote.msg.success", "Vote success"),
    ("page.body.wallet.history.header", "Wallet history"),
    ("page.header.signIN.noAccountYet", "Ainda não tem uma conta?"),
];

/// Look up a message by locale code and dotted key.
///
/// Returns `None` for an unknown locale or key; the host falls back to
/// its default-locale chain in that case.
pub fn message(locale: &str, key: &str) -> Option<&'static str> {
    let table = match locale {
        "pt" => PT,
        _ => return None,
    };
    table
        .binary_search_by_key(&key, |&(k, _)| k)
        .ok()
        .map(|i| table[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(PT.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn every_key_resolves() {
        for (key, text) in PT {
            assert_eq!(message("pt", key), Some(*text));
        }
    }

    #[test]
    fn known_messages_resolve() {
        assert_eq!(message("pt", "page.body.user.loggin"), Some("Entrar"));
        assert_eq!(message("pt", "page.body.user.register"), Some("Criar conta"));
        assert_eq!(
            message("pt", "page.header.signIN.noAccountYet"),
            Some("Ainda não tem uma conta?")
        );
    }

    #[test]
    fn concatenation_fragments_keep_their_trailing_space() {
        assert_eq!(
            message("pt", "page.body.trading.header.orderBook.header.title.price"),
            Some("Preço ")
        );
        assert_eq!(
            message("pt", "page.body.trade.header.newOrder.content.buyWith"),
            Some("Utilizará seu saldo em ")
        );
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(message("pt", "page.body.user.logout"), None);
        assert_eq!(message("pt", ""), None);
    }

    #[test]
    fn unknown_locale_is_none() {
        assert_eq!(message("en", "page.body.user.loggin"), None);
        assert_eq!(message("", "page.body.user.loggin"), None);
    }
}
