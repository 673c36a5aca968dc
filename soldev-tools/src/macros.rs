// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

macro_rules! copy_from_template {
    ($tmpl:literal -> $root:ident, $($files:expr),* $(,)?) => {
        $(
            std::fs::write(
                $root.join($files),
                include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $tmpl, "/", $files)),
            )?;
        )*
    };
}

macro_rules! copy_from_template_if_dne {
    ($tmpl:literal -> $root:ident, $($files:expr),* $(,)?) => {
        $(
            if !$root.join($files).exists() {
                copy_from_template!($tmpl -> $root, $files);
            }
        )*
    }
}

macro_rules! debug {
    (@$color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        log::debug!("{}", msg.$color())
    }};
}

macro_rules! greyln {
    ($($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        println!("{}", msg.grey())
    }};
}

#[allow(unused)]
macro_rules! mintln {
    ($($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        println!("{}", msg.mint())
    }};
}
