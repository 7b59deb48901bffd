use serde::Serializer;
use time::OffsetDateTime;
use time::macros::format_description;

pub fn front_time<S>(dt: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

    let formatted = dt
        .to_offset(time::UtcOffset::UTC)
        .format(&format)
        .map_err(serde::ser::Error::custom)?;

    s.serialize_str(&formatted)
}

pub fn front_time_option<S>(dt: &Option<OffsetDateTime>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => front_time(dt, s),
        None => s.serialize_none(),
    }
}
