//! Calling conventions shared by every easing:
//! - `check_time` (upper-bound validation)
//! - `normalized` (`f(t)` == `f(t, 0, 1, 1)`)
//! - `ranged` (`f(time, start, end)` via the normalized form)
//! - `out_in` (ease out over the first half, in over the second)

use crate::error::InvalidTimeError;
use crate::float::EaseFloat;

/// Reject `t` past the end of the duration.
///
/// There is no lower bound: negative time is extrapolated by the formulas,
/// since ranged callers can feed slightly negative values after rescaling.
#[inline]
pub fn check_time<F: EaseFloat>(t: F, d: F) -> Result<(), InvalidTimeError> {
    if t > d {
        log::debug!("easing rejected time {t}: exceeds duration {d}");
        return Err(InvalidTimeError::new(t.widen(), d.widen()));
    }
    Ok(())
}

/// Evaluate a raw easing over the unit interval: `ease(t, 0, 1, 1)`.
#[inline]
pub fn normalized<F, E>(ease: E, t: F) -> Result<F, InvalidTimeError>
where
    F: EaseFloat,
    E: Fn(F, F, F, F) -> Result<F, InvalidTimeError>,
{
    ease(t, F::zero(), F::one(), F::one())
}

/// Map `time` within `[start, end]` to an eased value within `[start, end]`:
/// `start + (end - start) * ease_unit((time - start) / (end - start))`.
///
/// Rejections carry the rescaled time and a limit of `1`.
#[inline]
pub fn ranged<F, E>(ease_unit: E, time: F, start: F, end: F) -> Result<F, InvalidTimeError>
where
    F: EaseFloat,
    E: Fn(F) -> Result<F, InvalidTimeError>,
{
    let span = end - start;
    Ok(start + span * ease_unit((time - start) / span)?)
}

/// OutIn combinator: `ease_out` over the first half of `d` with half the
/// change, then `ease_in` over the second half starting from `b + c/2`.
#[inline]
pub fn out_in<F, O, I>(
    ease_out: O,
    ease_in: I,
    t: F,
    b: F,
    c: F,
    d: F,
) -> Result<F, InvalidTimeError>
where
    F: EaseFloat,
    O: Fn(F, F, F, F) -> Result<F, InvalidTimeError>,
    I: Fn(F, F, F, F) -> Result<F, InvalidTimeError>,
{
    check_time(t, d)?;
    let two = F::lit(2.0);
    if t < d / two {
        ease_out(t * two, b, c / two, d)
    } else {
        ease_in((t * two) - d, b + c / two, c / two, d)
    }
}

/// Generate the normalized (`*_unit`) and ranged (`*_range`) forms of raw
/// easings. Trailing arguments in parentheses are passed after `(t, b, c, d)`,
/// for easings with shape parameters.
macro_rules! calling_forms {
    ($($raw:ident $(($($extra:expr),*))? => $unit:ident, $range:ident;)+) => {
        $(
            #[doc = concat!(
                "Normalized form of [`", stringify!($raw), "`]: `",
                stringify!($raw), "(t, 0, 1, 1)`."
            )]
            #[inline]
            pub fn $unit<F: $crate::float::EaseFloat>(
                t: F,
            ) -> Result<F, $crate::error::InvalidTimeError> {
                $crate::forms::normalized(
                    |t: F, b: F, c: F, d: F| $raw(t, b, c, d $($(, $extra)*)?),
                    t,
                )
            }

            #[doc = concat!(
                "Ranged form of [`", stringify!($raw), "`]: eases `time` within `[start, end]`."
            )]
            #[inline]
            pub fn $range<F: $crate::float::EaseFloat>(
                time: F,
                start: F,
                end: F,
            ) -> Result<F, $crate::error::InvalidTimeError> {
                $crate::forms::ranged($unit::<F>, time, start, end)
            }
        )+
    };
}

pub(crate) use calling_forms;
