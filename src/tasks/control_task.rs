// src/tasks/control_task.rs
use core::sync::atomic::Ordering;
use embassy_time::{Duration, Instant, Ticker};

use crate::data::{CHANNELS, SYSTEM_STATE};
#[cfg(feature = "debug-fuzzy")]
use fuzzy_track_pilot::config::fuzzy;
use fuzzy_track_pilot::config::track::system::{CONTROL_RATE_HZ, TELEMETRY_DIVIDER};
use fuzzy_track_pilot::control::{AvoidanceController, ControlLoop};
use fuzzy_track_pilot::sim::Track;

#[embassy_executor::task]
pub async fn task() {
    // Инициализация регулятора
    let controller = match AvoidanceController::new() {
        Ok(controller) => {
            defmt::info!("Нечеткий регулятор инициализирован");
            controller
        }
        Err(e) => {
            defmt::error!("Ошибка конфигурации нечеткого регулятора: {}", e);
            return;
        }
    };

    let mut control = ControlLoop::new(controller, Track::standard());
    let telemetry_sender = CHANNELS.telemetry_channel.sender();

    SYSTEM_STATE.running.store(true, Ordering::Relaxed);

    let mut ticker = Ticker::every(Duration::from_hz(CONTROL_RATE_HZ as u64));
    let mut last_tick = Instant::now();
    loop {
        ticker.next().await;

        // dt по фактическому времени между тиками
        let now = Instant::now();
        let dt = (now - last_tick).as_micros() as f32 / 1_000_000.0;
        last_tick = now;

        let report = control.step(dt);

        #[cfg(feature = "debug-fuzzy")]
        {
            let engine = control.controller().engine();
            if let Some(distance) = engine.variable(fuzzy::distance::NAME) {
                for (set, degree) in distance.fuzzify(report.distance) {
                    defmt::debug!("distance={} {}: {}", report.distance, set, degree);
                }
            }
        }

        // Обновляем глобальное состояние
        SYSTEM_STATE.ticks.store(report.tick, Ordering::Relaxed);
        SYSTEM_STATE
            .failed_evaluations
            .store(control.consecutive_failures(), Ordering::Relaxed);
        *SYSTEM_STATE.last_telemetry.lock().await = Some(report);

        // Телеметрия с пониженной частотой, ошибки вывода - всегда
        if report.degraded || report.tick % TELEMETRY_DIVIDER == 0 {
            if let Err(_) = telemetry_sender.try_send(report) {
                defmt::warn!("Буфер телеметрии переполнен");
            }
        }
    }
}
