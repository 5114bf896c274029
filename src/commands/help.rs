//! # help 命令实现

use crate::config::Config;

use colored::Color;

const FEATURES: &[&str] = &[
    "Save container images to tar archives (all or specific)",
    "Load tar archives back as container images",
    "List current images with ID and size",
    "List saved archives with sizes",
    "Delete archives after typed confirmation",
];

const TIPS: &[&str] = &[
    "Use comma-separated numbers: 1,3,5",
    "Use ranges for convenience: 1-5 or 1,3-5,7",
    "Invalid or out-of-range numbers are ignored",
    "Large images may take a while to save or load",
    "Press Ctrl-C to stop a batch after the current item",
];

/// 显示帮助信息
pub fn execute(config: &Config) {
    let out = &config.output;

    out.blank();
    out.rule(Color::Magenta);
    out.banner("HELP & ABOUT", Color::Magenta);
    out.rule(Color::Magenta);
    out.blank();

    out.line(&out.paint("Purpose:", Color::Cyan));
    out.line("   Save container images as tar archives for backup, transfer or");
    out.line("   archival, and load them back later.");
    out.blank();

    out.line(&out.paint("Features:", Color::Cyan));
    for feature in FEATURES {
        out.line(&format!("   • {}", feature));
    }
    out.blank();

    out.line(&out.paint("Tips:", Color::Cyan));
    for tip in TIPS {
        out.line(&format!("   • {}", tip));
    }
    out.line(&format!(
        "   • Archives are stored in '{}'",
        config.backup_dir().display()
    ));
    out.blank();

    out.line(&out.paint("Requirements:", Color::Cyan));
    out.line(&format!(
        "   • '{}' installed and its daemon running",
        config.engine
    ));
    out.line("   • Sufficient disk space for the archives");
    out.blank();

    out.rule(Color::Magenta);
    out.line(&format!("dimgr {}", env!("CARGO_PKG_VERSION")));
    out.blank();
}
