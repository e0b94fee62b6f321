//! Jump polynomial for dSFMT-19937: `x^(2^128) mod P(x)`, where `P` is the
//! minimal polynomial of the full 128-bit recurrence including the lung
//! (one step per 128-bit status word).

/// Coefficient words, little-endian (bit `i` is the coefficient of `x^i`).
#[rustfmt::skip]
pub(crate) const DSFMT_JUMP_POLY: [u64; 313] = [
    0xebfc783f10b6d4d8, 0x98b061b064c5187b, 0x2a092a49c8b37810, 0xe9ac9d671f39a422,
    0xa60d19f3cf886d57, 0xae23fc1e1c68bc17, 0x4a3dfa465d019adb, 0x6681b0d55d35009e,
    0x5722b8f39e69fb75, 0xce8af6ad7bc7e83d, 0x5441c44456fc2988, 0x628002dd87454d92,
    0x1676aad9267f4ffa, 0xf0e289ec39d6323f, 0x88b1296d09081ace, 0xf9952d92197164db,
    0x7d85d313b3a1d514, 0xe103952f99bf14c7, 0x65d104ec19bd8a69, 0x450d6a58ffdc0393,
    0x8e006b3f289c100f, 0xcbcb651b888e28c9, 0xbdc59c6dcde79050, 0x0484c11df6d71b39,
    0x37fe470be962cfc1, 0xe96a398c018f13eb, 0x7b2944650808c578, 0x1883bee83d0791b4,
    0x7407eb5cb023b962, 0xc33e3f861f98055e, 0x2c43bda16e1e8311, 0x120dd623b4ff598a,
    0x4b0d07bddd334a2e, 0x312127c89da76199, 0x237cdfaf5efdfc8d, 0xe67959a16369774b,
    0x4ba3df1e8119f7f4, 0xc696c638236966d0, 0x69737056ef1c0919, 0x68b37ae2915af7ed,
    0x0e251b6da16fe258, 0x784f414e12899df4, 0x04c310e052dcd63b, 0x870f71a5933ac94f,
    0xdb290ca8d69729dd, 0x02f1e7fcf96f801d, 0x67fe08eb9cb15c2f, 0xbedc90366cd44c12,
    0x733b9fb3addf8287, 0x0f23a5fe0783dd32, 0xe63b4158ad81d6fc, 0xbc6332aa947b5183,
    0xbdbfd94cb90322a0, 0x52dfb7de81a7cd35, 0x69e801b2ad33a6a3, 0x862275c59d869cae,
    0x527a75a9da8a3657, 0xa61b0cf81ef8dae4, 0x254e96e4a91048d3, 0x81e39a17efa8fc54,
    0x27cf071bc505121c, 0x9f1b1ae04ebd72cf, 0x6156b51ba4d63371, 0xee8c53e34460a38c,
    0x9e70101cdfd68b98, 0x25ce775577651089, 0xdda7a6582d9e5d6d, 0xfa308a6dacbe72a0,
    0x506ee24311350894, 0xb6d782e4ceba2827, 0x47f8aa5e65af78c5, 0x5937c6e94e3438ef,
    0x383d38a64480c994, 0x68efc57ee667ba44, 0x1225093649e5a6ac, 0x27bbf84bb991fec8,
    0x2cacbe6876ba8035, 0x39b59fe8387b3acf, 0x70a20ca47f598b5d, 0x5b7e5339592902fe,
    0x7ed731d70723f5aa, 0xd42fe276dc755881, 0xdf09c007fa5dd3fc, 0x00c44c88d75d0648,
    0x5b4389ab73cac8ac, 0x5cc6a46b1ca3fff6, 0x4a50eea2d9739833, 0xe2fc3d0c7d2abe71,
    0xf354dd31698e0850, 0x04df94f80c360f47, 0xb73f9611786432f7, 0xee14ca2cd1d3dc7f,
    0x95ac31bcd249d958, 0x276465bcdafa2ff7, 0x40eeb97b8d005c76, 0x79c5d02f4eaccf29,
    0x7144166b8a788eae, 0xd4f828ee6245e560, 0x7d061dbd4cea4e57, 0x1a7e57bb88ab3763,
    0xf780b8450f29e3f9, 0x74e30f3588f4fa9d, 0xf12f9c0141c18efa, 0x1cba386858a9457f,
    0xdf7fac6875cd37b7, 0x3bd34eab2485e5e7, 0xf382c7f8fa0acb96, 0x73bf3d17964f0ba3,
    0x92719d4a338fe7fb, 0x316a12ab13ef5302, 0xa5815bb37c2bdf19, 0x6d0b46532127f440,
    0x82df395b6036a2cf, 0xa9e6314741fa99c9, 0x40b01565c34b9ccc, 0x4329b29cee30f602,
    0x815e13019dd27879, 0x4ff335a41af5c7f9, 0xaecc294aed8ec3f3, 0x46fe2a1775c1ab79,
    0x857d37a2da02da1e, 0x6bd0fd91cbebc7c0, 0x6e43860a262d1a22, 0x9185b37adb3e7d2e,
    0x9fbfd98d171463fd, 0xb97ec5feffa4354c, 0x5c6821cf38163fad, 0x177561b380624265,
    0xe5b72d1b95d35a28, 0xf60139a863ff1fcb, 0x15c00364a92059c5, 0x0b7fcede47466d10,
    0x6f7f7a5c49505a12, 0x7082ee0482dc9dbd, 0xdc7e72fd3d4ad71a, 0x4f4a0bd36015d1eb,
    0x8a60696271543100, 0xc9961c697b7685b9, 0x67e9a25d154d1d9d, 0x721854c51e6242d9,
    0x90c20380e7e02cc1, 0xb9c8a119e0b84c73, 0x753fa02f2a3757ee, 0x0318c6f56d77f323,
    0x4795bd2fe0513cc7, 0x723064c7a7a6696c, 0x92522c1408e852f4, 0xd25727f4dd178aef,
    0x31623436b524fd78, 0xd8fd47abc3b673f6, 0xeab7c7644c9e41a1, 0x16ccd76d934c6fc6,
    0x0053a0fad300f7db, 0x1ee8c61563fb760f, 0xe2d4973df28ef59a, 0x655157c6b28d9944,
    0x5c1d1d4b4c099862, 0xbd3ce6015c573ebb, 0xb4d7a8aacacd01f8, 0xc9765e2a07b2bd1c,
    0xdaa74fa97c83afe7, 0xc416b7426acaf835, 0x9371dea2abf88115, 0x7d6e5fe794204d8d,
    0xdb6c3ee3e6a8cd86, 0x2fecaaa2cd06e8d8, 0xea9f33fd2ddf462b, 0x14dc3f4c6e760e4d,
    0x8b946e49f3c4273e, 0xefb9a13550c5e701, 0xbd15b8fb0254a5d3, 0xcaa3692608229279,
    0x481497bfad79523f, 0xc84cf29d47d4acb8, 0x78e71d0604439622, 0x5f670abe3c3f1baf,
    0x98b303faf8a8bb1a, 0x2e4fa2f895b00c31, 0xfe493a8c8f498cd3, 0x5f0219e2851ed828,
    0x4ba285809d965a67, 0x8fdbb2fed7d02998, 0x4c7ca83ec85bc3f8, 0x3fde02445bc096d7,
    0x86fbb6e3ae7234b8, 0x8797b462c7262c36, 0xa686b70ac3d51111, 0x25b865ace8792fb4,
    0xfc7367807ec10d54, 0xac2f69e72b4e5974, 0x0b01f9288e9ee424, 0xf98cf5391005b3b4,
    0x158f4449fb1f863d, 0x8f88a07386b9c5a2, 0x6c1b5d561d10a647, 0x96efba441b90afa5,
    0x740cf177fa9004c1, 0x235299b8785d3408, 0x00e3337fdc031c6d, 0x7cb31f91d1c73ddf,
    0x603f3b28979b2c44, 0x2451baa145a8e463, 0x889b400fbc93f046, 0xa6af0c5bb7e91317,
    0xe6f58f4cf1f1e355, 0xb58250d93793b339, 0xecf1d6030561a10d, 0xb921ae69a5343077,
    0x2a8f4ca3b5b8bc31, 0x476992f33bf93f38, 0x0dca57f3b9c750d5, 0x3f35f5a2b2b19b95,
    0x90065a20068627e8, 0x5f773d01e69869bf, 0x679031390f144102, 0x130701e6f581e0c6,
    0x49c3575241421b13, 0x49a69dc42b22b35d, 0x82f1f65e6f88fb39, 0x8c5b19a6d9c91941,
    0x79c4d6bd09a59c3d, 0x8d60ed4fdb5d4bd7, 0xa37dd6db125b03a4, 0x4b804a68756746f5,
    0xc5a90d3152f9015b, 0x05787d9855886bfb, 0xf8f608040879607c, 0xba33c7c78c7d923d,
    0xf8e1c9ec51d5d2bf, 0x78045a72ef3a97de, 0x1460712a147cbae5, 0xa0b0331815d34a9e,
    0x03ed42b19f0eb4ec, 0xc30915ad22b14c10, 0xdf6958f42c2718e0, 0x7f94f4a05853a6c1,
    0x62c2f64da8b6cbd8, 0x1fb208ba3891ace3, 0xfd0ad7ddbeb0e0ae, 0x69f577e3ae3a48d2,
    0x1193982ddc9f893f, 0x7323fc8012c38edc, 0x561918815af655e0, 0x6ba327b7f9234fa2,
    0x981a2694f02bd620, 0xdc5c8b43ee204c6b, 0x323aa4f2830be5c6, 0xacc77b65bf1103ae,
    0xd3074e669a882b0f, 0x4b2858434aecb93d, 0xafbba17ba038d3f8, 0xc9c5c28970869f6c,
    0x7914bbd920d14a02, 0x6a36d8a1e4cd6bb2, 0xb4b3633f1edeb2ae, 0x41d86c1773432f62,
    0x0f4bb1e0a3e25932, 0x4b851d29a009100e, 0x98d8c910038bf6ee, 0x6a07442e4e116366,
    0xee6fa33223347da1, 0xd954dacaa20a23a3, 0xac0a7eb149e54f60, 0x27bb9d6885d6888d,
    0xa7bce2bd1e9c2145, 0x8cc5107e2f2994c4, 0x505ced7748312259, 0x8d5cfa5a112a376d,
    0xc4a7e04774a0461f, 0x152cb6c30bab1157, 0x531aec3cbbfa4767, 0x607b646f944d97c4,
    0x03ab370839983380, 0x644eb2538eb8fce4, 0x555a9d8163c2799a, 0x151abea202d3bd5e,
    0xa706fe202a5ae6b7, 0x99a6c238c8daa3b7, 0x84fb830e12d1f08c, 0x5373915f32f1a11c,
    0xc2a4521be4478e3f, 0x958ec4f448b9d188, 0xa84afe5d1686f236, 0xd13fcba91a5442a8,
    0xc0099e7037aef28b, 0x2e08df806532d711, 0xc84de46e463ea567, 0x87815801a4e24ad0,
    0xf509c08f28f728bd, 0x13d850fc73b7920e, 0x60e5fff99a7090d1, 0x5e375ea63a560a3a,
    0x7eb6bce966869d32, 0x58af160a64ffc141, 0x3193de03d0d2a630, 0xba0c450920ba1801,
    0x4af02bf544fd3829, 0xfc4dd582b537315a, 0x71422ca69c85aa47, 0x594464cfd76d7ad1,
    0x93eaa7b7cf926e47, 0x373855165be5299a, 0xf65365f8114a6e84, 0x64fe47a0e3af7854,
    0xeb63ed14215cf915, 0xab8827289eb56630, 0xf8ddf122a80aff8f, 0x10468ad9f7abbc7a,
    0x5a1b4050808dbfcc, 0x14006f9347fe8258, 0x9aad211557d9b2e9, 0xfc08a765514693ac,
    0x0000000001f0e705,
];
