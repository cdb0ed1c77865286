#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BubbleColor {
    Primary,
    Secondary,
    #[default]
    Mixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleTone {
    Primary,
    Secondary,
    Green,
    Blue,
    Purple,
}

impl BubbleTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "bubble--primary",
            Self::Secondary => "bubble--secondary",
            Self::Green => "bubble--green",
            Self::Blue => "bubble--blue",
            Self::Purple => "bubble--purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left(u8),
    Right(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub top_pct: u8,
    pub side: Side,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleMotion {
    pub dx_px: f64,
    pub dy_px: f64,
    pub rotate_deg: f64,
    pub duration_secs: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleDescriptor {
    pub index: usize,
    pub anchor: Anchor,
    pub size_rem: f64,
    pub tone: BubbleTone,
    pub motion: BubbleMotion,
}

const POSITIONS: [Anchor; 8] = [
    Anchor { top_pct: 10, side: Side::Left(10) },
    Anchor { top_pct: 20, side: Side::Right(15) },
    Anchor { top_pct: 60, side: Side::Left(8) },
    Anchor { top_pct: 70, side: Side::Right(12) },
    Anchor { top_pct: 40, side: Side::Left(5) },
    Anchor { top_pct: 50, side: Side::Right(8) },
    Anchor { top_pct: 30, side: Side::Left(20) },
    Anchor { top_pct: 80, side: Side::Right(20) },
];

const SIZES_REM: [f64; 5] = [4.0, 5.0, 3.0, 6.0, 3.5];

const MIXED_TONES: [BubbleTone; 5] = [
    BubbleTone::Primary,
    BubbleTone::Secondary,
    BubbleTone::Green,
    BubbleTone::Blue,
    BubbleTone::Purple,
];

// (dx, dy, rotate, base duration, duration step per index)
const MOTIONS: [(f64, f64, f64, f64, f64); 4] = [
    (0.0, -20.0, 5.0, 6.0, 0.5),
    (0.0, 20.0, -5.0, 7.0, 0.3),
    (15.0, -15.0, 0.0, 8.0, 0.4),
    (-10.0, 15.0, 0.0, 9.0, 0.2),
];

fn tone_for(index: usize, color: BubbleColor) -> BubbleTone {
    match color {
        BubbleColor::Primary => BubbleTone::Primary,
        BubbleColor::Secondary => BubbleTone::Secondary,
        BubbleColor::Mixed => MIXED_TONES[index % MIXED_TONES.len()],
    }
}

fn motion_for(index: usize) -> BubbleMotion {
    let (dx_px, dy_px, rotate_deg, base, step) = MOTIONS[index % MOTIONS.len()];
    BubbleMotion {
        dx_px,
        dy_px,
        rotate_deg,
        duration_secs: base + index as f64 * step,
    }
}

pub fn descriptor(index: usize, color: BubbleColor) -> BubbleDescriptor {
    BubbleDescriptor {
        index,
        anchor: POSITIONS[index % POSITIONS.len()],
        size_rem: SIZES_REM[index % SIZES_REM.len()],
        tone: tone_for(index, color),
        motion: motion_for(index),
    }
}

pub fn generate(count: usize, color: BubbleColor) -> Vec<BubbleDescriptor> {
    (0..count).map(|index| descriptor(index, color)).collect()
}

impl BubbleDescriptor {
    pub fn style(&self) -> String {
        let horizontal = match self.anchor.side {
            Side::Left(offset) => format!("left: {offset}%;"),
            Side::Right(offset) => format!("right: {offset}%;"),
        };

        format!(
            "top: {}%; {horizontal} width: {size}rem; height: {size}rem; \
             --bubble-x: {}px; --bubble-y: {}px; --bubble-rotate: {}deg; \
             animation-duration: {:.1}s;",
            self.anchor.top_pct,
            self.motion.dx_px,
            self.motion.dy_px,
            self.motion.rotate_deg,
            self.motion.duration_secs,
            size = self.size_rem,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_a_pure_function_of_count_and_color() {
        for color in [BubbleColor::Primary, BubbleColor::Secondary, BubbleColor::Mixed] {
            assert_eq!(generate(8, color), generate(8, color));
        }
    }

    #[test]
    fn tables_cycle_by_index() {
        let first = descriptor(0, BubbleColor::Mixed);
        let wrapped = descriptor(POSITIONS.len(), BubbleColor::Mixed);
        assert_eq!(first.anchor, wrapped.anchor);

        assert_eq!(descriptor(5, BubbleColor::Mixed).size_rem, SIZES_REM[0]);
        assert_eq!(descriptor(5, BubbleColor::Mixed).tone, BubbleTone::Primary);
        assert_eq!(descriptor(3, BubbleColor::Mixed).tone, BubbleTone::Blue);
    }

    #[test]
    fn single_color_modes_ignore_index() {
        let tones: Vec<_> = generate(6, BubbleColor::Secondary)
            .into_iter()
            .map(|bubble| bubble.tone)
            .collect();
        assert!(tones.iter().all(|tone| *tone == BubbleTone::Secondary));
    }

    #[test]
    fn duration_grows_with_index_per_motion_row() {
        assert_eq!(descriptor(0, BubbleColor::Mixed).motion.duration_secs, 6.0);
        assert_eq!(descriptor(1, BubbleColor::Mixed).motion.duration_secs, 7.3);
        assert_eq!(descriptor(4, BubbleColor::Mixed).motion.duration_secs, 8.0);
        assert_eq!(descriptor(2, BubbleColor::Mixed).motion.dx_px, 15.0);
    }

    #[test]
    fn style_places_bubble_on_anchor_side() {
        let style = descriptor(1, BubbleColor::Primary).style();

        assert!(style.starts_with("top: 20%; right: 15%;"));
        assert!(style.contains("width: 5rem"));
        assert!(style.contains("--bubble-y: 20px"));
        assert!(style.contains("animation-duration: 7.3s"));
    }
}
