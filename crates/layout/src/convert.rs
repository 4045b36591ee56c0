//! Conversion from trellis style inputs to taffy styles.
use taffy::style::{LengthPercentage, LengthPercentageAuto};
use trellis_style::{
    AlignContent, AlignItems, AlignSelf, BoxSides, Dimension, FlexDirection, FlexStyle, FlexWrap,
    JustifyContent, Overflow, PositionType,
};

pub fn flex_style_to_taffy(style: &FlexStyle) -> taffy::style::Style {
    let overflow = to_taffy_overflow(style.overflow);
    taffy::style::Style {
        display: taffy::style::Display::Flex,
        box_sizing: taffy::style::BoxSizing::BorderBox,
        position: to_taffy_position(style.position),
        inset: taffy::geometry::Rect {
            left: to_taffy_inset(&style.left),
            right: to_taffy_inset(&style.right),
            top: to_taffy_inset(&style.top),
            bottom: to_taffy_inset(&style.bottom),
        },
        size: taffy::geometry::Size {
            width: to_taffy_dimension(&style.width),
            height: to_taffy_dimension(&style.height),
        },
        min_size: taffy::geometry::Size {
            width: to_taffy_dimension(&style.min_width),
            height: to_taffy_dimension(&style.min_height),
        },
        max_size: taffy::geometry::Size {
            width: to_taffy_dimension(&style.max_width),
            height: to_taffy_dimension(&style.max_height),
        },
        aspect_ratio: style.aspect_ratio,
        overflow: taffy::geometry::Point { x: overflow, y: overflow },
        scrollbar_width: 0.0,
        margin: to_taffy_margin(&style.margin),
        padding: to_taffy_lengths(&style.padding),
        border: to_taffy_lengths(&style.border_width),
        align_items: to_taffy_align_items(style.align_items),
        align_self: to_taffy_align_self(style.align_self),
        align_content: to_taffy_align_content(style.align_content),
        justify_content: to_taffy_justify_content(style.justify_content),
        flex_direction: to_taffy_flex_direction(style.flex_direction),
        flex_wrap: to_taffy_flex_wrap(style.flex_wrap),
        flex_grow: style.resolved_grow(),
        flex_shrink: style.resolved_shrink(),
        flex_basis: to_taffy_dimension(&style.flex_basis),
        ..Default::default()
    }
}

pub fn to_taffy_dimension(d: &Dimension) -> taffy::style::Dimension {
    match d {
        Dimension::Points(v) => taffy::style::Dimension::length(*v),
        Dimension::Percent(v) => taffy::style::Dimension::percent(v / 100.0),
        Dimension::Auto => taffy::style::Dimension::auto(),
    }
}

pub fn to_taffy_inset(d: &Dimension) -> LengthPercentageAuto {
    match d {
        Dimension::Points(v) => LengthPercentageAuto::length(*v),
        Dimension::Percent(v) => LengthPercentageAuto::percent(v / 100.0),
        Dimension::Auto => LengthPercentageAuto::auto(),
    }
}

pub fn to_taffy_margin(m: &BoxSides) -> taffy::geometry::Rect<LengthPercentageAuto> {
    taffy::geometry::Rect {
        left: LengthPercentageAuto::length(m.left()),
        right: LengthPercentageAuto::length(m.right()),
        top: LengthPercentageAuto::length(m.top()),
        bottom: LengthPercentageAuto::length(m.bottom()),
    }
}

pub fn to_taffy_lengths(m: &BoxSides) -> taffy::geometry::Rect<LengthPercentage> {
    taffy::geometry::Rect {
        left: LengthPercentage::length(m.left()),
        right: LengthPercentage::length(m.right()),
        top: LengthPercentage::length(m.top()),
        bottom: LengthPercentage::length(m.bottom()),
    }
}

pub fn to_taffy_position(p: PositionType) -> taffy::style::Position {
    match p {
        PositionType::Relative => taffy::style::Position::Relative,
        PositionType::Absolute => taffy::style::Position::Absolute,
    }
}

pub fn to_taffy_overflow(o: Overflow) -> taffy::style::Overflow {
    match o {
        Overflow::Visible => taffy::style::Overflow::Visible,
        Overflow::Hidden => taffy::style::Overflow::Hidden,
        Overflow::Scroll => taffy::style::Overflow::Scroll,
    }
}

pub fn to_taffy_align_items(a: AlignItems) -> Option<taffy::style::AlignItems> {
    match a {
        AlignItems::Auto => None,
        AlignItems::Stretch => Some(taffy::style::AlignItems::Stretch),
        AlignItems::FlexStart => Some(taffy::style::AlignItems::FlexStart),
        AlignItems::FlexEnd => Some(taffy::style::AlignItems::FlexEnd),
        AlignItems::Center => Some(taffy::style::AlignItems::Center),
        AlignItems::Baseline => Some(taffy::style::AlignItems::Baseline),
    }
}

pub fn to_taffy_align_self(a: AlignSelf) -> Option<taffy::style::AlignSelf> {
    match a {
        AlignSelf::Auto => None,
        AlignSelf::Stretch => Some(taffy::style::AlignSelf::Stretch),
        AlignSelf::FlexStart => Some(taffy::style::AlignSelf::FlexStart),
        AlignSelf::FlexEnd => Some(taffy::style::AlignSelf::FlexEnd),
        AlignSelf::Center => Some(taffy::style::AlignSelf::Center),
        AlignSelf::Baseline => Some(taffy::style::AlignSelf::Baseline),
    }
}

pub fn to_taffy_align_content(a: AlignContent) -> Option<taffy::style::AlignContent> {
    match a {
        AlignContent::Auto => None,
        AlignContent::FlexStart => Some(taffy::style::AlignContent::FlexStart),
        AlignContent::FlexEnd => Some(taffy::style::AlignContent::FlexEnd),
        AlignContent::Center => Some(taffy::style::AlignContent::Center),
        AlignContent::Stretch => Some(taffy::style::AlignContent::Stretch),
        AlignContent::SpaceBetween => Some(taffy::style::AlignContent::SpaceBetween),
        AlignContent::SpaceAround => Some(taffy::style::AlignContent::SpaceAround),
        AlignContent::Baseline => Some(taffy::style::AlignContent::FlexStart),
    }
}

pub fn to_taffy_justify_content(j: JustifyContent) -> Option<taffy::style::JustifyContent> {
    match j {
        JustifyContent::FlexStart => Some(taffy::style::JustifyContent::FlexStart),
        JustifyContent::FlexEnd => Some(taffy::style::JustifyContent::FlexEnd),
        JustifyContent::Center => Some(taffy::style::JustifyContent::Center),
        JustifyContent::SpaceBetween => Some(taffy::style::JustifyContent::SpaceBetween),
        JustifyContent::SpaceAround => Some(taffy::style::JustifyContent::SpaceAround),
        JustifyContent::SpaceEvenly => Some(taffy::style::JustifyContent::SpaceEvenly),
    }
}

pub fn to_taffy_flex_direction(f: FlexDirection) -> taffy::style::FlexDirection {
    match f {
        FlexDirection::Row => taffy::style::FlexDirection::Row,
        FlexDirection::RowReverse => taffy::style::FlexDirection::RowReverse,
        FlexDirection::Column => taffy::style::FlexDirection::Column,
        FlexDirection::ColumnReverse => taffy::style::FlexDirection::ColumnReverse,
    }
}

pub fn to_taffy_flex_wrap(f: FlexWrap) -> taffy::style::FlexWrap {
    match f {
        FlexWrap::NoWrap => taffy::style::FlexWrap::NoWrap,
        FlexWrap::Wrap => taffy::style::FlexWrap::Wrap,
        FlexWrap::WrapReverse => taffy::style::FlexWrap::WrapReverse,
    }
}
