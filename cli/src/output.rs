// Licensed under the Apache-2.0 license

//! Generated-file emission: the `gpio.c` pad table and its `gpio.h` header.

use padcfg_decoder::{generate, Options, Ownership, Platform};

use crate::parser::PadInfo;

const SPDX_HEADER: &str = "/* SPDX-License-Identifier: GPL-2.0-only */\n";

/// Render the `gpio.h` companion header.
pub fn header_file() -> String {
    let mut out = String::from(SPDX_HEADER);
    out.push_str(
        "\n#ifndef PCH_GPIO_H\n\
         #define PCH_GPIO_H\n\
         \n\
         #include <soc/gpe.h>\n\
         #include <soc/gpio.h>\n\
         \n\
         const struct pad_config *get_gpio_table(size_t *num);\n\
         const struct pad_config *get_early_gpio_table(size_t *num);\n\
         \n\
         #endif /* PCH_GPIO_H */\n",
    );
    out
}

/// Render the `gpio.c` pad table for the parsed entries.
///
/// With `raw` set, pads are emitted as `_PAD_CFG_STRUCT` register values
/// (interrupt-select byte masked off, ownership folded into bit 4 of DW1)
/// instead of decoded macros.
pub fn gpio_file(pads: &[PadInfo], platform: Platform, raw: bool, opts: &Options) -> String {
    let mut out = String::from(SPDX_HEADER);
    out.push_str("\n#include <commonlib/helpers.h>\n#include \"include/gpio.h\"\n");
    out.push_str("\n/* Pad configuration in ramstage */\n");
    out.push_str("static const struct pad_config gpio_table[] = {\n");
    for pad in pads {
        if pad.is_title() {
            out.push_str(&format!("\n\t/* {} */\n", pad.function));
        } else if pad.is_reserved() {
            out.push_str(&format!("\t/* {} - {} */\n", pad.id, pad.function));
        } else if raw {
            raw_entry(&mut out, pad);
        } else {
            macro_entry(&mut out, pad, platform, opts);
        }
    }
    out.push_str("};\n");

    out.push_str(
        "\n/* Early pad configuration in romstage */\n\
         static const struct pad_config early_gpio_table[] = {\n\
         \t/* TODO: Add early pad configuration */\n\
         };\n\
         \n\
         const struct pad_config *get_gpio_table(size_t *num)\n\
         {\n\
         \t*num = ARRAY_SIZE(gpio_table);\n\
         \treturn gpio_table;\n\
         }\n\
         \n\
         const struct pad_config *get_early_gpio_table(size_t *num)\n\
         {\n\
         \t*num = ARRAY_SIZE(early_gpio_table);\n\
         \treturn early_gpio_table;\n\
         }\n",
    );
    out
}

fn raw_entry(out: &mut String, pad: &PadInfo) {
    // The interrupt-select byte is read-only; drop it so raw tables diff
    // cleanly between boots.
    let mut dw1 = pad.dw1 & 0xffff_ff00;
    if pad.ownership == Ownership::Driver {
        dw1 |= 1 << 4;
    }
    out.push_str(&format!("\t/* {} - {} */\n", pad.id, pad.function));
    out.push_str(&format!(
        "\t_PAD_CFG_STRUCT({}, 0x{:08x}, 0x{:08x}),\n",
        pad.id, pad.dw0, dw1
    ));
}

fn macro_entry(out: &mut String, pad: &PadInfo, platform: Platform, opts: &Options) {
    if !pad.function.is_empty() {
        out.push_str(&format!("\t/* {} - {} */\n", pad.id, pad.function));
    }
    let text = generate(platform, &pad.id, pad.dw0, pad.dw1, pad.ownership, opts);
    out.push_str(&format!("\t{}\n", text));
}
