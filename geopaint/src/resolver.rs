//! Attribute driven paint selection.
//!
//! Area and point features are styled by their `admin_level` attribute, line features by their `road` attribute.
//! Every value that cannot be found falls back to the defaults from [`RenderOptions`].

use crate::attributes::{parse_bool, parse_integer, AttributeError, Attributes};
use crate::options::RenderOptions;
use crate::style::StyleTable;
use crate::Color;

/// Name of the attribute that selects the admin level rule.
pub const ADMIN_LEVEL_ATTRIBUTE: &str = "admin_level";
/// Name of the attribute that marks line features as roads.
pub const ROAD_ATTRIBUTE: &str = "road";

/// Paint of an area or point feature: the path is filled and then outlined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaPaint {
    /// Fill color.
    pub fill_color: Color,
    /// Outline color.
    pub border_color: Color,
    /// Outline width.
    pub line_width: f64,
}

/// Paint of a line feature: the path is only stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePaint {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

/// Selects paint for features using a [`StyleTable`] and the fallback values of [`RenderOptions`].
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    table: &'a StyleTable,
    options: &'a RenderOptions,
}

impl<'a> StyleResolver<'a> {
    /// Creates a new resolver.
    pub fn new(table: &'a StyleTable, options: &'a RenderOptions) -> Self {
        Self { table, options }
    }

    /// Paint used for areas when no rule applies.
    pub fn default_area_paint(&self) -> AreaPaint {
        AreaPaint {
            fill_color: self.options.default_fill_color,
            border_color: self.options.default_border_color,
            line_width: self.options.default_line_width,
        }
    }

    /// Paint used for lines that are not roads.
    pub fn default_line_paint(&self) -> LinePaint {
        LinePaint {
            color: self.options.default_border_color,
            width: self.options.default_line_width,
        }
    }

    /// Selects paint for an area or a point feature.
    ///
    /// Without an `admin_level` attribute, or when the table has no rule for the level, the default paint is used.
    /// Otherwise every field of the rule that is not set falls back to its default independently.
    pub fn resolve_area_style(&self, attributes: &Attributes) -> Result<AreaPaint, AttributeError> {
        let default = self.default_area_paint();
        let Some(level) = parse_integer(attributes, ADMIN_LEVEL_ATTRIBUTE)? else {
            return Ok(default);
        };

        let Some(rule) = self.table.rule(level) else {
            log::debug!("No style rule for admin level {level}, default paint is used");
            return Ok(default);
        };

        Ok(AreaPaint {
            fill_color: rule.fill_color.unwrap_or(default.fill_color),
            border_color: rule.border_color.unwrap_or(default.border_color),
            line_width: if rule.line_width != 0.0 {
                rule.line_width
            } else {
                default.line_width
            },
        })
    }

    /// Selects paint for a line feature.
    ///
    /// Returns `None` if the feature has no `road` attribute, meaning the line is not painted at all. Roads use the
    /// road rule of the table, other lines use the default border color and line width.
    pub fn resolve_line_style(
        &self,
        attributes: &Attributes,
    ) -> Result<Option<LinePaint>, AttributeError> {
        let Some(is_road) = parse_bool(attributes, ROAD_ATTRIBUTE)? else {
            return Ok(None);
        };

        let default = self.default_line_paint();
        if !is_road {
            return Ok(Some(default));
        }

        let rule = self.table.lines();
        Ok(Some(LinePaint {
            color: rule.road.unwrap_or(default.color),
            width: if rule.road_width != 0.0 {
                rule.road_width
            } else {
                default.width
            },
        }))
    }
}
