//! Human-readable report of one order exchange.
//!
//! The general lines (URL, status code) are always written. Request and
//! response detail only appears in verbose mode.

use std::fmt::Display;
use std::io::{self, Write};

use petstore_core::{Exchange, HttpMethod, Order, OrderClient};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}

pub fn display<W: Write>(out: &mut W, exchange: &Exchange, verbosity: Verbosity) -> io::Result<()> {
    let Exchange { request, response } = exchange;

    writeln!(out, "-----General Information-----")?;
    writeln!(out, "URL : {}", request.url)?;
    writeln!(out, "Status code : {}", response.status)?;

    if !verbosity.is_verbose() {
        return Ok(());
    }

    writeln!(out, "-----Request Information-----")?;
    writeln!(out, "Headers : {}", format_headers(&request.headers))?;
    writeln!(out, "Body Request : {}", request.body.as_deref().unwrap_or("None"))?;

    writeln!(out, "-----Response Information-----")?;
    writeln!(out, "Headers : {}", format_headers(&response.headers))?;
    writeln!(out, "Data : {}", response.body)?;

    // Delete answers with an acknowledgement envelope, not an order.
    if request.method != HttpMethod::Delete {
        match OrderClient::parse_order(response) {
            Ok(order) => writeln!(out, "Order : {}", describe(&order))?,
            Err(err) => tracing::debug!(%err, "response carries no order"),
        }
    }
    Ok(())
}

fn format_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe(order: &Order) -> String {
    fn field<T: Display>(value: &Option<T>) -> String {
        value.as_ref().map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    format!(
        "id={} pet_id={} quantity={} ship_date={} status={} complete={}",
        field(&order.id),
        field(&order.pet_id),
        field(&order.quantity),
        field(&order.ship_date),
        field(&order.status),
        field(&order.complete),
    )
}
