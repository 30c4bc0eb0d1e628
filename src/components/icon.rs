use dioxus::prelude::*;
use std::fmt;

use crate::assets::TABLER_SPRITE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    AlertCircle,
    Check,
    ChevronLeft,
    ChevronRight,
    Code,
    ExternalLink,
    FileDescription,
    History,
    InfoCircle,
    Shield,
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IconName::AlertCircle => "alert-circle",
            IconName::Check => "check",
            IconName::ChevronLeft => "chevron-left",
            IconName::ChevronRight => "chevron-right",
            IconName::Code => "code",
            IconName::ExternalLink => "external-link",
            IconName::FileDescription => "file-description",
            IconName::History => "history",
            IconName::InfoCircle => "info-circle",
            IconName::Shield => "shield",
        };
        write!(f, "{}", name)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub name: IconName,
    #[props(default = 20)]
    pub size: u32,
    #[props(default = "")]
    pub class: &'static str,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let sprite_url = TABLER_SPRITE.to_string();
    let icon_id = format!("tabler-{}", props.name);

    rsx! {
        svg {
            class: "icon {props.class}",
            width: "{props.size}",
            height: "{props.size}",
            "aria-hidden": "true",
            r#use {
                href: "{sprite_url}#{icon_id}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_match_sprite_ids() {
        let sprite = include_str!("../../assets/icons/tabler-sprite.svg");
        for name in [
            IconName::AlertCircle,
            IconName::Check,
            IconName::ChevronLeft,
            IconName::ChevronRight,
            IconName::Code,
            IconName::ExternalLink,
            IconName::FileDescription,
            IconName::History,
            IconName::InfoCircle,
            IconName::Shield,
        ] {
            let id = format!("id=\"tabler-{name}\"");
            assert!(sprite.contains(&id), "missing sprite symbol {id}");
        }
    }
}
