#![no_std]
#![no_main]

use core::sync::atomic::Ordering;

use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

mod data;
mod tasks;

use crate::data::SYSTEM_STATE;
use crate::tasks::*;
use fuzzy_track_pilot::config::track::system;
use fuzzy_track_pilot::control::Proximity;

/// Точка входа в программу
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Инициализация HAL Raspberry Pi Pico
    let p = embassy_rp::init(Default::default());

    defmt::info!("=== Нечеткий объезд препятствий v0.1.0 ===");
    defmt::info!("Инициализация системы...");

    // Настройка светодиода для индикации состояния
    let mut led = Output::new(p.PIN_25, Level::Low);

    // Мигаем светодиодом при старте
    for _ in 0..3 {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(100)).await;
    }

    // Запуск асинхронных задач
    defmt::info!("Запуск задач...");

    // Задача телеметрии
    if spawner.spawn(telemetry_task::task()).is_err() {
        defmt::error!("Не удалось запустить задачу телеметрии");
    }

    // Задача контура управления
    if spawner.spawn(control_task::task()).is_err() {
        defmt::error!("Не удалось запустить задачу управления");
        return;
    }

    defmt::info!("Система инициализирована. Ожидание первого тика...");

    // Ждем готовности контура
    loop {
        if SYSTEM_STATE.is_ready().await {
            defmt::info!("Контур управления работает");
            break;
        }
        Timer::after(Duration::from_millis(system::MONITOR_PERIOD_MS)).await;
    }

    // Основной цикл: индикация близости и контроль ошибок вывода
    let mut warned = false;
    loop {
        let proximity = SYSTEM_STATE
            .last_telemetry
            .lock()
            .await
            .map(|t| t.proximity);

        // Светодиод горит, пока препятствие близко
        match proximity {
            Some(Proximity::Near) => led.set_high(),
            _ => led.set_low(),
        }

        let failures = SYSTEM_STATE.failed_evaluations.load(Ordering::Relaxed);
        if failures > system::MAX_CONSECUTIVE_FAILURES && !warned {
            defmt::error!(
                "Регулятор не отвечает {} тиков подряд (tick={})",
                failures,
                SYSTEM_STATE.ticks.load(Ordering::Relaxed)
            );
            warned = true;
        } else if failures == 0 {
            warned = false;
        }

        Timer::after(Duration::from_millis(system::STATUS_PERIOD_MS)).await;
    }
}
