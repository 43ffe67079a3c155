use super::LicenseType;

/// A known license: canonical passages that any copy of it contains.
#[derive(Debug, Clone, Copy)]
pub struct CorpusEntry {
    pub id: &'static str,
    pub category: LicenseType,
    pub passages: &'static [&'static str],
}

/// Built-in license corpus.
pub const BUILTIN: &[CorpusEntry] = &[
    CorpusEntry {
        id: "AGPL-3.0",
        category: LicenseType::Forbidden,
        passages: &[
            "GNU AFFERO GENERAL PUBLIC LICENSE Version 3, 19 November 2007",
            "The GNU Affero General Public License is a free, copyleft license for software and \
             other kinds of works, specifically designed to ensure cooperation with the community \
             in the case of network server software.",
        ],
    },
    CorpusEntry {
        id: "WTFPL",
        category: LicenseType::Forbidden,
        passages: &[
            "DO WHAT THE FUCK YOU WANT TO PUBLIC LICENSE",
            "TERMS AND CONDITIONS FOR COPYING, DISTRIBUTION AND MODIFICATION 0. You just DO WHAT \
             THE FUCK YOU WANT TO.",
        ],
    },
    CorpusEntry {
        id: "GPL-2.0",
        category: LicenseType::Restricted,
        passages: &[
            "GNU GENERAL PUBLIC LICENSE Version 2, June 1991",
            "The licenses for most software are designed to take away your freedom to share and \
             change it. By contrast, the GNU General Public License is intended to guarantee your \
             freedom to share and change free software--to make sure the software is free for all \
             its users.",
        ],
    },
    CorpusEntry {
        id: "GPL-3.0",
        category: LicenseType::Restricted,
        passages: &[
            "GNU GENERAL PUBLIC LICENSE Version 3, 29 June 2007",
            "The GNU General Public License is a free, copyleft license for software and other \
             kinds of works.",
        ],
    },
    CorpusEntry {
        id: "LGPL-2.1",
        category: LicenseType::Restricted,
        passages: &[
            "GNU LESSER GENERAL PUBLIC LICENSE Version 2.1, February 1999",
            "This is the first released version of the Lesser GPL. It also counts as the successor \
             of the GNU Library Public License, version 2, hence the version number 2.1.",
        ],
    },
    CorpusEntry {
        id: "LGPL-3.0",
        category: LicenseType::Restricted,
        passages: &[
            "GNU LESSER GENERAL PUBLIC LICENSE Version 3, 29 June 2007",
            "This version of the GNU Lesser General Public License incorporates the terms and \
             conditions of version 3 of the GNU General Public License, supplemented by the \
             additional permissions listed below.",
        ],
    },
    CorpusEntry {
        id: "MPL-2.0",
        category: LicenseType::Reciprocal,
        passages: &[
            "Mozilla Public License Version 2.0",
            "\"Contributor\" means each individual or legal entity that creates, contributes to \
             the creation of, or owns Covered Software.",
        ],
    },
    CorpusEntry {
        id: "MIT",
        category: LicenseType::Permissive,
        passages: &[
            "Permission is hereby granted, free of charge, to any person obtaining a copy of this \
             software and associated documentation files (the \"Software\"), to deal in the \
             Software without restriction, including without limitation the rights to use, copy, \
             modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, \
             and to permit persons to whom the Software is furnished to do so, subject to the \
             following conditions:",
            "The above copyright notice and this permission notice shall be included in all \
             copies or substantial portions of the Software.",
        ],
    },
    CorpusEntry {
        id: "ISC",
        category: LicenseType::Permissive,
        passages: &[
            "Permission to use, copy, modify, and/or distribute this software for any purpose \
             with or without fee is hereby granted, provided that the above copyright notice and \
             this permission notice appear in all copies.",
        ],
    },
    CorpusEntry {
        id: "BSD-2-Clause",
        category: LicenseType::Permissive,
        passages: &[
            "Redistribution and use in source and binary forms, with or without modification, are \
             permitted provided that the following conditions are met:",
            "Redistributions of source code must retain the above copyright notice, this list of \
             conditions and the following disclaimer.",
            "Redistributions in binary form must reproduce the above copyright notice, this list \
             of conditions and the following disclaimer in the documentation and/or other \
             materials provided with the distribution.",
        ],
    },
    CorpusEntry {
        id: "BSD-3-Clause",
        category: LicenseType::Permissive,
        passages: &[
            "Redistribution and use in source and binary forms, with or without modification, are \
             permitted provided that the following conditions are met:",
            "Redistributions of source code must retain the above copyright notice, this list of \
             conditions and the following disclaimer.",
            "Redistributions in binary form must reproduce the above copyright notice, this list \
             of conditions and the following disclaimer in the documentation and/or other \
             materials provided with the distribution.",
            // Projects name themselves in this clause, so only its tail is matched.
            "may be used to endorse or promote products derived from this software without \
             specific prior written permission.",
        ],
    },
    CorpusEntry {
        id: "Apache-2.0",
        category: LicenseType::Permissive,
        passages: &[
            "Apache License Version 2.0, January 2004",
            "TERMS AND CONDITIONS FOR USE, REPRODUCTION, AND DISTRIBUTION",
            "Subject to the terms and conditions of this License, each Contributor hereby grants \
             to You a perpetual, worldwide, non-exclusive, no-charge, royalty-free, irrevocable \
             copyright license to reproduce, prepare Derivative Works of, publicly display, \
             publicly perform, sublicense, and distribute the Work and such Derivative Works in \
             Source or Object form.",
        ],
    },
    CorpusEntry {
        id: "Unlicense",
        category: LicenseType::Unencumbered,
        passages: &[
            "This is free and unencumbered software released into the public domain.",
            "Anyone is free to copy, modify, publish, use, compile, sell, or distribute this \
             software, either in source code form or as a compiled binary, for any purpose, \
             commercial or non-commercial, and by any means.",
        ],
    },
    CorpusEntry {
        id: "CC0-1.0",
        category: LicenseType::Unencumbered,
        passages: &[
            "Creative Commons Legal Code CC0 1.0 Universal",
            "CREATIVE COMMONS CORPORATION IS NOT A LAW FIRM AND DOES NOT PROVIDE LEGAL SERVICES.",
        ],
    },
];
