//! man(7) NAME section body.
//!
//! The section is free text, conventionally `name[, name...] \- description`,
//! possibly split over several lines and decorated with font macros.

use super::{Scanner, Step};
use crate::model::Dialect;
use crate::roff;

pub(super) fn body_line(s: &mut Scanner<'_>, text: &str) -> Step {
    if let Some((name, _)) = roff::request(text) {
        match name {
            "SH" | "SS" => return Step::Finish,
            "ig" | "de" => s.begin_skip(Dialect::Man),
            _ => {}
        }
        return Step::Continue;
    }

    if s.in_description {
        s.description.push(' ');
        s.description.push_str(text);
        return Step::Continue;
    }

    if text.starts_with('-') {
        s.in_description = true;
        s.description = format!("({}) {}", s.section, text);
    } else if let (Some((names, _)), Some((_, description))) =
        (text.split_once(" - "), text.rsplit_once(" - "))
    {
        // aliases end at the first separator, the description follows the last
        s.in_description = true;
        s.description = format!("({}) - {}", s.section, description);
        s.names.merge(names.trim());
    } else {
        s.names.merge(text.trim());
    }
    Step::Continue
}
