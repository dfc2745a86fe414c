// src/callbacks/mod.rs

pub mod handlers;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::finals::Dataset;
use crate::ui::layout::{COUNTRY_DROPDOWN, COUNTRY_OUTPUT, YEAR_DROPDOWN, YEAR_OUTPUT};
use crate::ui::EventKind;

pub use handlers::{country_summary, year_summary};

/// Maps the current selection to the text shown in the output region.
pub type Handler = fn(&Dataset, &Value) -> Result<String>;

#[derive(Debug, Clone, Copy)]
pub struct Callback {
    pub output: &'static str,
    pub handler: Handler,
}

/// New children for one output region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    pub output: String,
    pub children: String,
}

/// One `(input, event) → output` wiring, as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub input: String,
    pub event: EventKind,
    pub output: String,
}

#[derive(Error, Debug)]
pub enum DispatchError {
    /// Nothing is bound to this component and event.
    #[error("no callback bound to {event} on `{id}`")]
    UnknownTrigger { id: String, event: EventKind },
    /// The handler could not resolve the selected value.
    #[error("lookup failed: {0:#}")]
    Lookup(#[source] anyhow::Error),
}

/// Dispatch table from `(component id, event)` to its callback.
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    table: HashMap<(String, EventKind), Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two dropdown lookups of the dashboard.
    pub fn dashboard() -> Self {
        let mut reg = Self::new();
        reg.register(COUNTRY_DROPDOWN, EventKind::Change, COUNTRY_OUTPUT, country_summary);
        reg.register(YEAR_DROPDOWN, EventKind::Change, YEAR_OUTPUT, year_summary);
        reg
    }

    pub fn register(
        &mut self,
        input: &str,
        event: EventKind,
        output: &'static str,
        handler: Handler,
    ) -> &mut Self {
        if self
            .table
            .insert((input.to_string(), event), Callback { output, handler })
            .is_some()
        {
            warn!(input, %event, "replacing existing callback");
        }
        self
    }

    pub fn get(&self, id: &str, event: EventKind) -> Option<&Callback> {
        self.table.get(&(id.to_string(), event))
    }

    /// Run the callback bound to `(id, event)` against `data`.
    pub fn dispatch(
        &self,
        data: &Dataset,
        id: &str,
        event: EventKind,
        value: &Value,
    ) -> Result<Patch, DispatchError> {
        let cb = self.get(id, event).ok_or_else(|| DispatchError::UnknownTrigger {
            id: id.to_string(),
            event,
        })?;
        let children = (cb.handler)(data, value).map_err(DispatchError::Lookup)?;
        debug!(input = id, output = cb.output, %value, "dispatched");
        Ok(Patch {
            output: cb.output.to_string(),
            children,
        })
    }

    /// All wirings, sorted by input id.
    pub fn dependencies(&self) -> Vec<Dependency> {
        let mut deps: Vec<Dependency> = self
            .table
            .iter()
            .map(|((input, event), cb)| Dependency {
                input: input.clone(),
                event: *event,
                output: cb.output.to_string(),
            })
            .collect();
        deps.sort_by(|a, b| a.input.cmp(&b.input));
        deps
    }
}
