use crate::{RenderValue, Result};
use chrono::{DateTime, FixedOffset};
use harbor_xml::XmlElement;
use rust_decimal::Decimal;

/// A point in time rendered as a fixed-width numeric `value` attribute.
///
/// The underlying date-time is formatted as `YYYYMMDDhhmmss` and
/// truncated to `precision` digits. The signed UTC offset is appended
/// only when the precision keeps the seconds and the offset flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStamp {
    date: DateTime<FixedOffset>,
    precision: usize,
    offset: bool,
}

impl TimeStamp {
    pub const PRECISION_DAY: usize = 8;
    pub const PRECISION_MINUTE: usize = 12;
    pub const PRECISION_SECONDS: usize = 14;

    pub fn new(date: DateTime<FixedOffset>) -> Self {
        TimeStamp {
            date,
            precision: Self::PRECISION_SECONDS,
            offset: false,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_offset(mut self, offset: bool) -> Self {
        self.offset = offset;
        self
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    pub fn set_offset(&mut self, offset: bool) {
        self.offset = offset;
    }

    /// The encoded attribute value, shared by every element that carries
    /// a timestamp (`effectiveTime`, `time`, `birthTime`, interval
    /// bounds).
    pub fn encode(&self) -> String {
        let mut value = self.date.format("%Y%m%d%H%M%S").to_string();
        value.truncate(self.precision);

        if self.precision >= Self::PRECISION_SECONDS && self.offset {
            value.push_str(&self.date.format("%z").to_string());
        }

        value
    }
}

impl From<DateTime<FixedOffset>> for TimeStamp {
    fn from(date: DateTime<FixedOffset>) -> Self {
        TimeStamp::new(date)
    }
}

impl RenderValue for TimeStamp {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        el.set_attribute("value", self.encode());
        Ok(())
    }
}

/// A measured amount: a numeric value with a UCUM unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalQuantity {
    unit: Option<String>,
    value: Option<Decimal>,
}

impl PhysicalQuantity {
    pub fn new(unit: impl Into<String>, value: Decimal) -> Self {
        PhysicalQuantity {
            unit: Some(unit.into()),
            value: Some(value),
        }
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }
}

impl RenderValue for PhysicalQuantity {
    fn render_onto(&self, el: &mut XmlElement) -> Result<()> {
        if let Some(value) = self.value {
            el.set_attribute("value", value.to_string());
        }

        if let Some(unit) = &self.unit {
            el.set_attribute("unit", unit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ts(rfc3339: &str) -> TimeStamp {
        TimeStamp::new(DateTime::parse_from_rfc3339(rfc3339).unwrap())
    }

    #[test]
    fn test_default_precision() {
        let stamp = ts("2009-12-12T17:21:51-05:00");
        let mut el = XmlElement::new("effectiveTime");
        stamp.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("value"), Some("20091212172151"));
    }

    #[test]
    fn test_day_precision() {
        let stamp = ts("2009-12-12T17:21:51-05:00").with_precision(TimeStamp::PRECISION_DAY);
        let mut el = XmlElement::new("effectiveTime");
        stamp.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("value"), Some("20091212"));
    }

    #[test]
    fn test_minute_precision() {
        let stamp = ts("2014-08-27T01:43:12+02:00").with_precision(TimeStamp::PRECISION_MINUTE);
        let mut el = XmlElement::new("effectiveTime");
        stamp.render_onto(&mut el).unwrap();

        assert_eq!(el.attribute("value"), Some("201408270143"));
    }

    #[test]
    fn test_offset_disabled_by_default() {
        let stamp = ts("2009-12-12T17:21:51-05:00").with_precision(TimeStamp::PRECISION_SECONDS);

        assert_eq!(stamp.encode(), "20091212172151");
    }

    #[test]
    fn test_offset_appended_at_full_precision() {
        let stamp = ts("2009-12-12T17:21:51-05:00").with_offset(true);

        assert_eq!(stamp.encode(), "20091212172151-0500");
    }

    #[test]
    fn test_offset_suppressed_below_seconds_precision() {
        let stamp = ts("2009-12-12T17:21:51-05:00")
            .with_precision(TimeStamp::PRECISION_DAY)
            .with_offset(true);

        assert_eq!(stamp.encode(), "20091212");
    }

    #[test]
    fn test_physical_quantity() {
        let quantity = PhysicalQuantity::new("mg", dec!(200));
        let mut el = XmlElement::new("doseQuantity");
        quantity.render_onto(&mut el).unwrap();

        assert_eq!(
            harbor_xml::element_to_string(&el).unwrap(),
            r#"<doseQuantity value="200" unit="mg"/>"#
        );
    }
}
