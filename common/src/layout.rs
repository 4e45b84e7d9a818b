//! ランディングページのレイアウト計算
//!
//! スクロール量とビューポート幅だけから決まる見た目の状態

/// この量を超えてスクロールしたらナビバーを不透明にする
pub const SOLID_NAV_SCROLL_Y: f64 = 50.0;

/// これより狭いビューポートはハンバーガーメニュー
pub const COMPACT_NAV_WIDTH: f64 = 768.0;

/// 背景グラデーションの更新間隔（ミリ秒）
pub const GRADIENT_TICK_MS: u64 = 30;

/// 1ティックあたりの回転角
pub const GRADIENT_STEP_DEG: f32 = 0.3;

/// ナビバーの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavLayout {
    pub solid: bool,
    pub compact: bool,
}

impl NavLayout {
    pub fn from_viewport(scroll_y: f64, width: f64) -> Self {
        Self {
            solid: scroll_y > SOLID_NAV_SCROLL_Y,
            compact: width < COMPACT_NAV_WIDTH,
        }
    }

    pub fn class_name(&self) -> String {
        let mut classes = vec!["navbar"];
        if self.solid {
            classes.push("scrolled");
        }
        if self.compact {
            classes.push("compact");
        }
        classes.join(" ")
    }
}

pub fn next_gradient_angle(angle: f32) -> f32 {
    (angle + GRADIENT_STEP_DEG) % 360.0
}

pub fn background_style(angle: f32) -> String {
    format!(
        "background: linear-gradient({:.1}deg, #0f1115, #1a1c22, #22232c)",
        angle
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_layout_top_of_wide_page() {
        let layout = NavLayout::from_viewport(0.0, 1280.0);
        assert_eq!(layout, NavLayout { solid: false, compact: false });
        assert_eq!(layout.class_name(), "navbar");
    }

    #[test]
    fn test_nav_layout_thresholds() {
        assert!(!NavLayout::from_viewport(50.0, 1024.0).solid);
        assert!(NavLayout::from_viewport(50.5, 1024.0).solid);
        assert!(!NavLayout::from_viewport(0.0, 768.0).compact);
        assert!(NavLayout::from_viewport(0.0, 767.0).compact);
    }

    #[test]
    fn test_nav_layout_class_name() {
        let layout = NavLayout::from_viewport(200.0, 375.0);
        assert_eq!(layout.class_name(), "navbar scrolled compact");
    }

    #[test]
    fn test_gradient_angle_wraps() {
        assert!((next_gradient_angle(0.0) - 0.3).abs() < f32::EPSILON);
        let wrapped = next_gradient_angle(359.9);
        assert!(wrapped < 1.0, "wrapped angle: {}", wrapped);
    }

    #[test]
    fn test_background_style() {
        assert_eq!(
            background_style(90.0),
            "background: linear-gradient(90.0deg, #0f1115, #1a1c22, #22232c)"
        );
    }
}
