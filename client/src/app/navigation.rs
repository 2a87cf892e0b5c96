//! # Navigation Guard
//!
//! Routes, the synchronous authentication guard, and the back-stack.
//!
//! The guard only looks at whether the session store holds a token. Whether
//! that token is still valid is discovered later, by the first authorized
//! request that comes back as an authorization failure.

use std::fmt;
use std::str::FromStr;

use crate::core::error::AppError;
use crate::services::session::SessionStore;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Phone + OTP login
    Login,
    /// Nearby shops
    Shops,
    /// One shop and its products
    ShopDetail(i64),
    Cart,
    Checkout,
    /// Order history
    Orders,
    OrderDetail(i64),
    Wallet,
    Profile,
}

impl Route {
    /// Landing route after a successful login.
    pub const HOME: Route = Route::Shops;

    /// Whether the route needs a session token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Title for headers.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Shops => "Shops Near You",
            Route::ShopDetail(_) => "Shop",
            Route::Cart => "Your Cart",
            Route::Checkout => "Checkout",
            Route::Orders => "Your Orders",
            Route::OrderDetail(_) => "Order Details",
            Route::Wallet => "Wallet",
            Route::Profile => "Profile",
        }
    }

    /// Path form, e.g. `/shops/3`.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Shops => "/shops".to_string(),
            Route::ShopDetail(id) => format!("/shops/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::OrderDetail(id) => format!("/orders/{}", id),
            Route::Wallet => "/wallet".to_string(),
            Route::Profile => "/profile".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    /// Parse `shops`, `/shops/3`, `orders/12`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/').to_ascii_lowercase();
        let mut parts = trimmed.split('/');
        let head = parts.next().unwrap_or_default();
        let id = parts.next();
        if parts.next().is_some() {
            return Err(unknown_route(s));
        }

        let parse_id = |id: &str| {
            id.parse::<i64>()
                .map_err(|_| AppError::Validation(format!("Invalid id in route: {}", s)))
        };

        match (head, id) {
            ("login", None) => Ok(Route::Login),
            ("shops", None) => Ok(Route::Shops),
            ("shops", Some(id)) => Ok(Route::ShopDetail(parse_id(id)?)),
            ("cart", None) => Ok(Route::Cart),
            ("checkout", None) => Ok(Route::Checkout),
            ("orders", None) => Ok(Route::Orders),
            ("orders", Some(id)) => Ok(Route::OrderDetail(parse_id(id)?)),
            ("wallet", None) => Ok(Route::Wallet),
            ("profile", None) => Ok(Route::Profile),
            _ => Err(unknown_route(s)),
        }
    }
}

fn unknown_route(s: &str) -> AppError {
    AppError::Validation(format!("Unknown route: {}", s))
}

/// Verdict of the guard for one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Allowed(Route),
    /// The screen must not load; the user goes to `to` instead.
    Redirected { requested: Route, to: Route },
}

impl Activation {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Activation::Allowed(_))
    }

    /// Route the user ends up on.
    pub fn route(&self) -> Route {
        match self {
            Activation::Allowed(route) => *route,
            Activation::Redirected { to, .. } => *to,
        }
    }
}

/// Authentication guard. Local and synchronous: no request is made.
pub fn guard(route: Route, session: &SessionStore) -> Activation {
    if route.requires_auth() && !session.is_authenticated() {
        tracing::info!(
            route = %route,
            "Access denied: {} requires authentication, redirecting to login",
            route.title()
        );
        Activation::Redirected {
            requested: route,
            to: Route::Login,
        }
    } else {
        Activation::Allowed(route)
    }
}

/// Current route plus back-stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Route::Login,
            history: Vec::new(),
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Go to `route`, remembering the current one. Pushing the current route
    /// again is a no-op.
    pub fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        self.history.push(self.current);
        self.current = route;
    }

    /// Swap the current route without touching history.
    pub fn replace(&mut self, route: Route) {
        self.current = route;
    }

    /// Pop the back-stack. Returns the new current route.
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(previous)
    }

    /// Start over at `route` with an empty history.
    pub fn reset_to(&mut self, route: Route) {
        self.history.clear();
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_login_is_public() {
        assert!(!Route::Login.requires_auth());
        for route in [
            Route::Shops,
            Route::ShopDetail(1),
            Route::Cart,
            Route::Checkout,
            Route::Orders,
            Route::OrderDetail(1),
            Route::Wallet,
            Route::Profile,
        ] {
            assert!(route.requires_auth(), "{} should be protected", route);
        }
    }

    #[test]
    fn test_guard_redirects_without_token() {
        let session = SessionStore::in_memory();
        assert_eq!(
            guard(Route::Cart, &session),
            Activation::Redirected {
                requested: Route::Cart,
                to: Route::Login
            }
        );
        assert_eq!(guard(Route::Login, &session), Activation::Allowed(Route::Login));

        session.set("abc123");
        assert_eq!(guard(Route::Cart, &session), Activation::Allowed(Route::Cart));

        session.clear();
        assert_eq!(guard(Route::Cart, &session).route(), Route::Login);
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!("profile".parse::<Route>().unwrap(), Route::Profile);
        assert_eq!("/shops/3".parse::<Route>().unwrap(), Route::ShopDetail(3));
        assert_eq!("Orders/12/".parse::<Route>().unwrap(), Route::OrderDetail(12));
        assert!("shops/abc".parse::<Route>().is_err());
        assert!("cart/1".parse::<Route>().is_err());
        assert!("settings".parse::<Route>().is_err());

        let route = Route::OrderDetail(42);
        assert_eq!(route.path().parse::<Route>().unwrap(), route);
    }

    #[test]
    fn test_navigator_back_stack() {
        let mut nav = Navigator::default();
        assert_eq!(nav.current(), Route::Login);
        assert!(!nav.can_go_back());

        nav.reset_to(Route::Shops);
        nav.push(Route::ShopDetail(3));
        nav.push(Route::ShopDetail(3));
        nav.push(Route::Cart);
        assert_eq!(nav.history(), &[Route::Shops, Route::ShopDetail(3)]);

        nav.replace(Route::Checkout);
        assert_eq!(nav.back(), Some(Route::ShopDetail(3)));
        assert_eq!(nav.back(), Some(Route::Shops));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Route::Shops);
    }
}
