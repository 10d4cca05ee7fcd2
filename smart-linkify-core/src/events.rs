//! events.rs - Dispatch helpers for the click and hover hooks.
//!
//! The engine never fires these itself. UI bindings that inject the markup
//! call them from their own event wiring.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::LinkifyOptions;
use crate::errors::LinkifyError;

/// Fires `on_link_click`, then `on_click` when `track_clicks` is on.
pub fn dispatch_link_click(options: &LinkifyOptions, href: &str) -> Result<(), LinkifyError> {
    if let Some(hook) = &options.on_link_click {
        hook.call(href).map_err(|e| LinkifyError::hook("on_link_click", e))?;
    }
    if LinkifyOptions::flag(options.track_clicks) {
        if let Some(hook) = &options.on_click {
            debug!("Tracking click.");
            hook.call(href).map_err(|e| LinkifyError::hook("on_click", e))?;
        }
    }
    Ok(())
}

/// Fires `on_link_hover`.
pub fn dispatch_link_hover(options: &LinkifyOptions, href: &str) -> Result<(), LinkifyError> {
    match &options.on_link_hover {
        Some(hook) => hook.call(href).map_err(|e| LinkifyError::hook("on_link_hover", e)),
        None => Ok(()),
    }
}
