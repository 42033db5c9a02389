use log::debug;

/// Visual theme for a section's decorative backdrop.
///
/// Unknown tags resolve to [`Variant::Hero`] so a bad value can never block
/// page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Hero,
    Gamer,
    Webdev,
    Network,
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        match value {
            "hero" => Self::Hero,
            "gamer" => Self::Gamer,
            "webdev" => Self::Webdev,
            "network" => Self::Network,
            _ => {
                debug!("unknown backdrop variant {value:?}, using hero");
                Self::Hero
            }
        }
    }
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gamer => "gamer",
            Self::Webdev => "webdev",
            Self::Network => "network",
        }
    }

    pub fn all() -> Vec<Variant> {
        vec![Self::Hero, Self::Gamer, Self::Webdev, Self::Network]
    }

    pub fn config(self) -> &'static VariantConfig {
        match self {
            Self::Hero => &HERO,
            Self::Gamer => &GAMER,
            Self::Webdev => &WEBDEV,
            Self::Network => &NETWORK,
        }
    }

    /// Themed icons floated over the shapes. At most three per variant; the
    /// hero backdrop has none.
    pub fn float_icons(self) -> &'static [FloatIconSpec] {
        match self {
            Self::Hero => &[],
            Self::Gamer => &GAMER_ICONS,
            Self::Webdev => &WEBDEV_ICONS,
            Self::Network => &NETWORK_ICONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Blob,
}

/// One gradient-filled background shape, anchored to a section corner.
#[derive(Debug, Clone, Copy)]
pub struct ShapePreset {
    pub size: u32,
    pub pos: &'static str,
    pub color_inner: &'static str,
    pub color_outer: &'static str,
    pub opacity: &'static str,
    pub shape: ShapeKind,
}

#[derive(Debug, Clone, Copy)]
pub struct VariantConfig {
    pub shape_a: ShapePreset,
    pub shape_b: ShapePreset,
    pub wave: bool,
    pub wave_opacity: f64,
}

impl VariantConfig {
    /// String-keyed registry lookup. Unrecognized tags deterministically
    /// resolve to the hero entry.
    pub fn for_tag(tag: &str) -> &'static VariantConfig {
        Variant::from(tag).config()
    }

    /// An explicit caller override always wins; otherwise the per-variant
    /// default governs.
    pub fn show_wave(&self, wave: Option<bool>) -> bool {
        wave.unwrap_or(self.wave)
    }
}

/// A single themed icon with its own float cycle parameters.
#[derive(Debug, Clone, Copy)]
pub struct FloatIconSpec {
    pub icon: &'static str,
    pub pos: &'static str,
    pub delay: f64,
    pub dist: f64,
    pub dur: f64,
}

const DARK: &str = "#0f172a";

static HERO: VariantConfig = VariantConfig {
    shape_a: ShapePreset {
        size: 520,
        pos: "-top-24 -left-24",
        color_inner: "#60A5FA",
        color_outer: DARK,
        opacity: "opacity-40",
        shape: ShapeKind::Circle,
    },
    shape_b: ShapePreset {
        size: 640,
        pos: "-bottom-32 -right-28",
        color_inner: "#34d399",
        color_outer: DARK,
        opacity: "opacity-30",
        shape: ShapeKind::Circle,
    },
    wave: true,
    wave_opacity: 0.04,
};

static GAMER: VariantConfig = VariantConfig {
    shape_a: ShapePreset {
        size: 520,
        pos: "-top-24 -left-24",
        color_inner: "#3B82F6",
        color_outer: DARK,
        opacity: "opacity-35",
        shape: ShapeKind::Circle,
    },
    shape_b: ShapePreset {
        size: 620,
        pos: "-bottom-28 -right-24",
        color_inner: "#059669",
        color_outer: DARK,
        opacity: "opacity-30",
        shape: ShapeKind::Blob,
    },
    wave: true,
    wave_opacity: 0.04,
};

static WEBDEV: VariantConfig = VariantConfig {
    shape_a: ShapePreset {
        size: 500,
        pos: "-top-20 left-[45%]",
        color_inner: "#A78BFA",
        color_outer: DARK,
        opacity: "opacity-30",
        shape: ShapeKind::Blob,
    },
    shape_b: ShapePreset {
        size: 540,
        pos: "-bottom-24 -left-24",
        color_inner: "#22D3EE",
        color_outer: DARK,
        opacity: "opacity-25",
        shape: ShapeKind::Circle,
    },
    wave: false,
    wave_opacity: 0.04,
};

static NETWORK: VariantConfig = VariantConfig {
    shape_a: ShapePreset {
        size: 520,
        pos: "-top-24 -right-24",
        color_inner: "#F59E0B",
        color_outer: DARK,
        opacity: "opacity-[0.28]",
        shape: ShapeKind::Circle,
    },
    shape_b: ShapePreset {
        size: 520,
        pos: "-bottom-24 -left-24",
        color_inner: "#10B981",
        color_outer: DARK,
        opacity: "opacity-[0.28]",
        shape: ShapeKind::Blob,
    },
    wave: true,
    wave_opacity: 0.03,
};

static GAMER_ICONS: [FloatIconSpec; 3] = [
    FloatIconSpec {
        icon: "fa-solid fa-gamepad",
        pos: "right-20 top-8 text-white/90 text-3xl md:text-4xl",
        delay: 0.2,
        dist: 12.0,
        dur: 5.0,
    },
    FloatIconSpec {
        icon: "fa-solid fa-keyboard",
        pos: "right-44 top-40 text-white/80 text-2xl md:text-3xl",
        delay: 0.6,
        dist: 16.0,
        dur: 5.0,
    },
    FloatIconSpec {
        icon: "fa-solid fa-computer-mouse",
        pos: "right-6 top-56 text-white/80 text-2xl md:text-3xl",
        delay: 1.0,
        dist: 14.0,
        dur: 5.0,
    },
];

static WEBDEV_ICONS: [FloatIconSpec; 3] = [
    FloatIconSpec {
        icon: "fa-solid fa-code",
        pos: "left-10 top-10 text-white/90 text-3xl md:text-4xl",
        delay: 0.1,
        dist: 12.0,
        dur: 5.0,
    },
    FloatIconSpec {
        icon: "fa-solid fa-laptop-code",
        pos: "left-1/3 top-28 text-white/85 text-3xl md:text-4xl",
        delay: 0.5,
        dist: 14.0,
        dur: 5.0,
    },
    FloatIconSpec {
        icon: "fa-brands fa-react",
        pos: "left-12 top-56 text-white/85 text-3xl md:text-4xl",
        delay: 0.9,
        dist: 18.0,
        dur: 5.0,
    },
];

static NETWORK_ICONS: [FloatIconSpec; 3] = [
    FloatIconSpec {
        icon: "fa-solid fa-server",
        pos: "right-12 top-10 text-white/90 text-3xl md:text-4xl",
        delay: 0.15,
        dist: 12.0,
        dur: 5.0,
    },
    FloatIconSpec {
        icon: "fa-solid fa-network-wired",
        pos: "right-1/4 top-32 text-white/85 text-3xl md:text-4xl",
        delay: 0.55,
        dist: 16.0,
        dur: 5.0,
    },
    FloatIconSpec {
        icon: "fa-solid fa-wifi",
        pos: "right-14 top-60 text-white/85 text-3xl md:text-4xl",
        delay: 0.95,
        dist: 14.0,
        dur: 5.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_shape_populated(p: &ShapePreset) {
        assert!(p.size > 0);
        assert!(!p.pos.is_empty());
        assert!(p.color_inner.starts_with('#'));
        assert!(p.color_outer.starts_with('#'));
        assert!(!p.opacity.is_empty());
    }

    #[test]
    fn every_variant_has_a_fully_populated_config() {
        for variant in Variant::all() {
            let cfg = variant.config();
            assert_shape_populated(&cfg.shape_a);
            assert_shape_populated(&cfg.shape_b);
            assert!(cfg.wave_opacity > 0.0 && cfg.wave_opacity < 1.0);
        }
    }

    #[test]
    fn known_tags_resolve_to_their_variant() {
        assert_eq!(Variant::from("hero"), Variant::Hero);
        assert_eq!(Variant::from("gamer"), Variant::Gamer);
        assert_eq!(Variant::from("webdev"), Variant::Webdev);
        assert_eq!(Variant::from("network"), Variant::Network);
    }

    #[test]
    fn unknown_tags_fall_back_to_hero() {
        assert_eq!(Variant::from("designer"), Variant::Hero);
        assert_eq!(Variant::from(""), Variant::Hero);
        // Tags are case-sensitive
        assert_eq!(Variant::from("GAMER"), Variant::Hero);

        assert!(std::ptr::eq(
            VariantConfig::for_tag("designer"),
            Variant::Hero.config()
        ));
    }

    #[test]
    fn tag_names_round_trip() {
        for variant in Variant::all() {
            assert_eq!(Variant::from(variant.as_str()), variant);
        }
    }

    #[test]
    fn explicit_wave_override_always_wins() {
        for variant in Variant::all() {
            let cfg = variant.config();
            assert!(cfg.show_wave(Some(true)));
            assert!(!cfg.show_wave(Some(false)));
            assert_eq!(cfg.show_wave(None), cfg.wave);
        }
    }

    #[test]
    fn per_variant_wave_defaults() {
        assert!(Variant::Hero.config().wave);
        assert!(Variant::Gamer.config().wave);
        assert!(!Variant::Webdev.config().wave);
        assert!(Variant::Network.config().wave);
    }

    #[test]
    fn icon_groups_are_small_and_staggered() {
        assert!(Variant::Hero.float_icons().is_empty());
        for variant in Variant::all() {
            let icons = variant.float_icons();
            assert!(icons.len() <= 3);
            for spec in icons {
                assert!(!spec.icon.is_empty());
                assert!(!spec.pos.is_empty());
                assert!(spec.dist > 0.0);
                assert!(spec.dur > 0.0);
            }
            // distinct delays keep the group from bobbing in lockstep
            for (i, a) in icons.iter().enumerate() {
                for b in &icons[i + 1..] {
                    assert_ne!(a.delay, b.delay);
                }
            }
        }
    }
}
