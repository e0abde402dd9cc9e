use crate::{error::GuideError, graphs::Capacity};

/// Number of trips needed to move `tourists` over a path whose narrowest
/// vehicle seats `bottleneck` people, one of them being the guide.
pub fn minimum_trips(bottleneck: Capacity, tourists: u32) -> Result<u32, GuideError> {
    if tourists == 0 {
        return Ok(0);
    }

    let seats = bottleneck.saturating_sub(1);
    if seats == 0 {
        return Err(GuideError::NoSeatsAvailable { bottleneck });
    }

    Ok(tourists.div_ceil(seats))
}
