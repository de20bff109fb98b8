//! Non-chart menu entries: panels handled by the shell and outbound links.

pub struct LinkDef {
    pub name: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub struct PanelDef {
    pub name: &'static str,
    pub title: &'static str,
}

/// A folder of links in the root menu
pub struct LinkFolder {
    pub name: &'static str,
    pub links: &'static [LinkDef],
}

pub const EXPLORER: PanelDef = PanelDef {
    name: "Explorer",
    title: "Block Explorer",
};

pub const TABLE: PanelDef = PanelDef {
    name: "Table",
    title: "Metrics Table",
};

pub const SIMULATIONS: &[PanelDef] = &[PanelDef {
    name: "Save In Bitcoin",
    title: "Save In Bitcoin Simulation",
}];

pub const TOOLS: LinkFolder = LinkFolder {
    name: "Tools",
    links: &[
        LinkDef {
            name: "API",
            title: "Metrics API Documentation",
            url: "https://bitview.space/api",
        },
        LinkDef {
            name: "MCP",
            title: "Model Context Protocol Server",
            url: "https://github.com/bitcoinresearchkit/brk/tree/main/crates/brk_mcp",
        },
        LinkDef {
            name: "Crates",
            title: "Rust Crates",
            url: "https://crates.io/crates/brk",
        },
    ],
};

pub const HOSTING: LinkFolder = LinkFolder {
    name: "Hosting",
    links: &[
        LinkDef {
            name: "Self",
            title: "Run Your Own Instance",
            url: "https://github.com/bitcoinresearchkit/brk",
        },
        LinkDef {
            name: "Status",
            title: "Service Status",
            url: "https://status.bitview.space",
        },
    ],
};

pub const COMMUNITY: LinkFolder = LinkFolder {
    name: "Community",
    links: &[
        LinkDef {
            name: "GitHub",
            title: "Source Code",
            url: "https://github.com/bitcoinresearchkit/brk",
        },
        LinkDef {
            name: "Nostr",
            title: "Nostr Profile",
            url: "https://primal.net/bitview",
        },
        LinkDef {
            name: "Discord",
            title: "Discord Server",
            url: "https://discord.gg/WACpShCB7M",
        },
    ],
};

pub const DONATE: LinkDef = LinkDef {
    name: "Donate",
    title: "Support The Project",
    url: "https://geyser.fund/project/brk",
};

pub const SHARE: LinkDef = LinkDef {
    name: "Share",
    title: "Share The Dashboard",
    url: "https://bitview.space",
};
