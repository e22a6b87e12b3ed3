//! Target-independent core of the Astral Grid admin.
//!
//! Everything here compiles natively and is shared by the Yew front-end:
//! the site model and its wire envelopes, the REST endpoint table, the
//! error taxonomy, draft validation and the list-view cache.

pub mod api;
pub mod form;
pub mod list;
pub mod model;
pub mod notification;
pub mod requests;
pub mod route;
