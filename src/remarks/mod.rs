//! METAR/TAF remarks section.
//!
//! [`handlers`] returns the catalog in trial order, which follows the order
//! groups appear in a report. Tower/surface visibility is tried before the
//! plain `VIS ... RWY` group so `TWR VIS` is never split.

pub mod atoms;
pub mod helpers;
pub mod translate;

#[cfg(test)]
mod tests;

use crate::{Handler, Parser, Result};

use atoms::*;

/// Every remark handler, in registration order.
pub fn handlers() -> Result<Vec<Handler>> {
    Ok(vec![
        handler!(atom: REMARKS_IDENTIFIER.clone(), translate: |f| { translate::remarks_identifier(&f) }),
        handler!(atom: AUTOMATED_STATION.clone(), translate: |f| { translate::automated_station(&f) }),
        Handler::constant(AIRCRAFT_MISHAP.clone(), "Aircraft mishap"),
        handler!(atom: PEAK_WIND.clone(), translate: |f| { translate::peak_wind(&f) }),
        handler!(atom: WIND_SHIFT.clone(), translate: |f| { translate::wind_shift(&f) }),
        handler!(atom: TOWER_OR_SURFACE_VISIBILITY.clone(), translate: |f| {
            translate::tower_or_surface_visibility(&f)
        }),
        handler!(atom: VISIBILITY_AT_SECOND_LOCATION.clone(), translate: |f| {
            translate::visibility_at_second_location(&f)
        }),
        handler!(atom: VARIABLE_CEILING_HEIGHT.clone(), translate: |f| { translate::variable_ceiling(&f) }),
        Handler::with_captures_fn(CEILING_HEIGHT_AT_SECOND_LOCATION.clone(), translate::ceiling_at_second_location)?,
        handler!(atom: LIGHTNING.clone(), translate: |f| { translate::lightning(&f) }),
        handler!(atom: VIRGA.clone(), translate: |f| { translate::virga(&f) }),
        handler!(atom: TORNADIC_ACTIVITY.clone(), translate: |f| { translate::tornadic_activity(&f) }),
        handler!(atom: BEGIN_END_PRECIPITATION.clone(), translate: |f| { translate::begin_end_precipitation(&f) }),
        handler!(atom: PRESSURE_CHANGE.clone(), translate: |f| { translate::pressure_change(&f) }),
        handler!(atom: SEA_LEVEL_PRESSURE.clone(), translate: |f| { translate::sea_level_pressure(&f) }),
        handler!(atom: HOURLY_TEMPERATURE.clone(), translate: |f| { translate::hourly_temperature(&f) }),
        Handler::constant(MAINTENANCE_INDICATOR.clone(), "Maintenance is needed on the system"),
    ])
}

/// A fresh parser with every remark handler registered.
pub fn parser() -> Result<Parser> {
    let mut parser = Parser::new();
    for handler in handlers()? {
        parser.register(handler);
    }
    Ok(parser)
}
