//! 背景グラデーションのアニメーション

use std::time::Duration;

use detector_common::layout::GRADIENT_TICK_MS;
use detector_common::next_gradient_angle;
use gloo::console;
use leptos::prelude::*;

/// 一定間隔で回転するグラデーション角度
///
/// インターバルはコンポーネントのアンマウント時に止める
pub fn use_gradient_angle() -> ReadSignal<f32> {
    let (angle, set_angle) = signal(0.0f32);

    let tick = move || set_angle.update(|a| *a = next_gradient_angle(*a));
    match set_interval_with_handle(tick, Duration::from_millis(GRADIENT_TICK_MS)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => console::warn!("背景アニメーションを開始できません", err),
    }

    angle
}
