// src/tasks/telemetry_task.rs
use crate::data::CHANNELS;
use fuzzy_track_pilot::control::Proximity;
use fuzzy_track_pilot::utils::math::rad_to_deg;

/// Вывод телеметрии в лог вместо отрисовки трассы
#[embassy_executor::task]
pub async fn task() {
    defmt::info!("Запуск задачи телеметрии");

    let telemetry_receiver = CHANNELS.telemetry_channel.receiver();

    loop {
        let t = telemetry_receiver.receive().await;

        if t.degraded {
            defmt::warn!(
                "tick={} вывод не удался, удерживаем уклонение {}",
                t.tick,
                t.avoidance
            );
            continue;
        }

        let marker = match t.proximity {
            Proximity::Near => "БЛИЗКО",
            Proximity::Clear => "свободно",
        };

        defmt::info!(
            "tick={} pos=({}, {}) угол={}° r={} dist={} avoid={} [{}]",
            t.tick,
            t.x,
            t.y,
            rad_to_deg(t.angle),
            t.radius,
            t.distance,
            t.avoidance,
            marker
        );
    }
}
