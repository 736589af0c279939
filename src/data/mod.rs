// src/data/mod.rs
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;

use fuzzy_track_pilot::control::Telemetry;

/// Размер буфера канала телеметрии
const TELEMETRY_CHANNEL_SIZE: usize = 8;

/// Общее состояние системы (для быстрого доступа без блокировок)
pub struct SystemState {
    /// Контур управления запущен
    pub running: AtomicBool,
    /// Номер последнего тика
    pub ticks: AtomicU32,
    /// Подряд неудачные выводы регулятора
    pub failed_evaluations: AtomicU32,
    pub last_telemetry: Mutex<CriticalSectionRawMutex, Option<Telemetry>>,
}

/// Каналы для передачи данных между задачами
pub struct DataChannels {
    // Канал от контура управления к телеметрии
    pub telemetry_channel: Channel<CriticalSectionRawMutex, Telemetry, TELEMETRY_CHANNEL_SIZE>,
}

impl DataChannels {
    pub const fn new() -> Self {
        Self {
            telemetry_channel: Channel::new(),
        }
    }
}

impl SystemState {
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
            ticks: AtomicU32::new(0),
            failed_evaluations: AtomicU32::new(0),
            last_telemetry: Mutex::new(None),
        }
    }

    /// Контур запущен и выдал хотя бы один отчет
    pub async fn is_ready(&self) -> bool {
        let running = self.running.load(Ordering::Relaxed);
        let has_report = self.last_telemetry.lock().await.is_some();

        running && has_report
    }
}

// Статические экземпляры для глобального доступа
pub static CHANNELS: DataChannels = DataChannels::new();
pub static SYSTEM_STATE: SystemState = SystemState::new();
