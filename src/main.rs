//! # Matcard - 中子输运材料卡片生成工具
//!
//! 由化学式或混合物描述计算各同位素原子数密度 (atoms/b-cm)，
//! 输出 MCNP/PHITS 材料卡片。
//!
//! ## 子命令
//! - `card`     - 单个材料卡片
//! - `batch`    - 批量处理材料清单 CSV，生成卡片组文件
//! - `inspect`  - 查看元素符号解析出的同位素
//! - `condense` - 合并结构式中的重复原子
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (批量并行处理)
//!   │     └── matcard    (库: chem/, parsers/, models/, error.rs)
//!   └── utils/      (工具函数)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
