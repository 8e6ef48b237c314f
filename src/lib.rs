//  ____  ____                 __  __       _
// |  _ \|  _ \ __ _ ___ ___  |  \/  | __ _| |_ ___
// | |_) | |_) / _` / __/ __| | |\/| |/ _` | __/ _ \
// |  _ <|  __/ (_| \__ \__ \ | |  | | (_| | ||  __/
// |_| \_\_|   \__,_|___/___/ |_|  |_|\__,_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-10
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password hygiene toolkit written in Rust.

pub mod checker;
pub mod commands;
pub mod configtool;
pub mod hasher;
pub mod passgen;
