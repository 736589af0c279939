//! Нечеткий регулятор объезда препятствий на круговой трассе
//!
//! Ядро - движок нечеткого вывода Мамдани (`fuzzy`), не требующий
//! аллокатора. Вокруг него: конфигурация (`config`), симуляция трассы и
//! агента (`sim`) и замкнутый контур управления (`control`).

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod fuzzy;
pub mod sim;
pub mod utils;
