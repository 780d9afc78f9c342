//! Static route table mapping logical operation names to URI templates.
//!
//! Templates use `%{name}` placeholders substituted from request parameters
//! at resolution time. The table is fixed at process start; templates are
//! checked for well-formedness when the table is first built, so a malformed
//! entry fails loudly before any request is made.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

use super::params::Params;

/// Route table entries: `(name, template)`.
const ROUTES: &[(&str, &str)] = &[
    ("api.token", "/session/token"),
    ("api.token.invalidate", "/session/token"),
    ("user.profile", "/user/profile"),
    ("user.margins", "/user/margins"),
    ("user.margins.segment", "/user/margins/%{segment}"),
    ("orders", "/orders"),
    ("orders.info", "/orders/%{order_id}"),
    ("orders.place", "/orders/%{variety}"),
    ("orders.modify", "/orders/%{variety}/%{order_id}"),
    ("orders.cancel", "/orders/%{variety}/%{order_id}"),
    ("orders.trades", "/orders/%{order_id}/trades"),
    ("trades", "/trades"),
    ("portfolio.positions", "/portfolio/positions"),
    ("portfolio.holdings", "/portfolio/holdings"),
    ("market.instruments.all", "/instruments"),
    ("market.instruments", "/instruments/%{exchange}"),
    ("market.quote", "/quote"),
    ("market.quote.ohlc", "/quote/ohlc"),
    ("market.quote.ltp", "/quote/ltp"),
];

static TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    for (name, template) in ROUTES {
        if let Err(e) = placeholders(template) {
            // Static data; a malformed template is unreachable through any
            // public input and must abort before the first request.
            panic!("malformed route template for {name}: {e}");
        }
    }
    ROUTES.iter().copied().collect()
});

/// Extract the placeholder names from a template, rejecting unterminated or
/// empty `%{}` tokens.
fn placeholders(template: &str) -> std::result::Result<Vec<&str>, String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("%{") {
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| format!("unterminated placeholder in {template:?}"))?;
        let name = &after[..end];
        if name.is_empty() {
            return Err(format!("empty placeholder in {template:?}"));
        }
        names.push(name);
        rest = &after[end + 1..];
    }
    Ok(names)
}

/// Resolve a route name to a URI path, substituting placeholders from
/// `params`.
///
/// Keys consumed by the template are removed from `params` so they are not
/// serialized again as query or body parameters. A placeholder with no
/// matching key is a caller error and fails before any network activity.
pub(crate) fn resolve(name: &str, params: &mut Params) -> Result<String> {
    let template = TABLE
        .get(name)
        .ok_or_else(|| Error::UnknownRoute(name.to_string()))?;

    let mut path = String::with_capacity(template.len());
    let mut rest = *template;
    while let Some(start) = rest.find("%{") {
        path.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        // Validated at table construction; `}` is always present.
        let end = after.find('}').unwrap_or(after.len());
        let key = &after[..end];
        let value = params.take(key).ok_or_else(|| Error::MissingParameter {
            route: name.to_string(),
            name: key.to_string(),
        })?;
        path.push_str(&value);
        rest = &after[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_well_formed() {
        for (name, template) in ROUTES {
            let names = placeholders(template)
                .unwrap_or_else(|e| panic!("route {name}: {e}"));
            // Each placeholder appears once and nothing else looks like one.
            for n in &names {
                assert!(!n.contains('%') && !n.contains('{'), "route {name}");
            }
        }
    }

    #[test]
    fn test_resolve_static_route() {
        let mut params = Params::new();
        assert_eq!(resolve("user.profile", &mut params).unwrap(), "/user/profile");
    }

    #[test]
    fn test_resolve_substitutes_all_placeholders() {
        let mut params = Params::new()
            .push("variety", "regular")
            .push("order_id", "151220000000000")
            .push("quantity", 5);
        let path = resolve("orders.modify", &mut params).unwrap();
        assert_eq!(path, "/orders/regular/151220000000000");
        assert!(!path.contains("%{"));
        // Consumed keys are gone; the rest survive for the body.
        assert_eq!(params.to_pairs(), vec![("quantity", "5")]);
    }

    #[test]
    fn test_resolve_missing_parameter() {
        let mut params = Params::new().push("variety", "regular");
        let err = resolve("orders.cancel", &mut params).unwrap_err();
        match err {
            Error::MissingParameter { route, name } => {
                assert_eq!(route, "orders.cancel");
                assert_eq!(name, "order_id");
            }
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_route() {
        let mut params = Params::new();
        assert!(matches!(
            resolve("orders.teleport", &mut params),
            Err(Error::UnknownRoute(_))
        ));
    }

    #[test]
    fn test_placeholder_scanner_rejects_malformed() {
        assert!(placeholders("/orders/%{order_id").is_err());
        assert!(placeholders("/orders/%{}").is_err());
        assert_eq!(
            placeholders("/orders/%{variety}/%{order_id}").unwrap(),
            vec!["variety", "order_id"]
        );
    }
}
