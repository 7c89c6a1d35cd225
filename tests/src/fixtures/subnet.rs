//! Headers captured from a live subnet, hex-encoded as submitted to the relay.
//!
//! Every set bootstraps with epoch length 900 and gap 450.

/// Full storage run: genesis with legacy extra data, bootstrap #1, then #2..#5 in rounds 4..7, each certifying its parent with four of five signatures.
pub mod full {
    /// Initial validator set.
    pub const VALIDATORS: [&str; 5] = [
        "0x10982668af23d3e4b8d26805543618412ac724d4",
        "0x6f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b2614",
        "0x80f489a673042c2e5f17e5b2a5e49d71bf0611a4",
        "0xb51df3658799cccb48c172d54e3bc89649f04eb4",
        "0xd23cf44b862ba86703f11f6e94a4a833f4fe2244",
    ];

    /// #0, legacy extra data.
    pub const GENESIS_HASH: &str = "0xc2e6a789316fe7112553ef911649f2d19380ce6746288b9fa6fc5af8ad16ef2a";
    pub const GENESIS: &str = "0xf902bea00000000000000000000000000000000000000000000000000000000000000000a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347940000000000000000000000000000000000000000a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421b901000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001808347b760808464d68a93b8c5000000000000000000000000000000000000000000000000000000000000000010982668af23d3e4b8d26805543618412ac724d46f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b261480f489a673042c2e5f17e5b2a5e49d71bf0611a4b51df3658799cccb48c172d54e3bc89649f04eb4d23cf44b862ba86703f11f6e94a4a833f4fe22440000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000a0000000000000000000000000000000000000000000000000000000000000000088000000000000000080c0c0c0";

    /// #1, round 2.
    pub const BLOCK_1_HASH: &str = "0x684d18e0081cbe82cab66173647eaf2b078413da5f79a1082a5228314c23ae15";
    pub const BLOCK_1: &str = "0xf902cfa0c2e6a789316fe7112553ef911649f2d19380ce6746288b9fa6fc5af8ad16ef2aa01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479480f489a673042c2e5f17e5b2a5e49d71bf0611a4a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421b90100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000101841908b100808464d68e35aa02e802e6e3a0c2e6a789316fe7112553ef911649f2d19380ce6746288b9fa6fc5af8ad16ef2a8080c080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841160324f07543714bd91d4576bc74a6fe8c0aa706781ed943479a5ee0d9c2ed75174a776ee736030bb0d080947514d83c69ed328c69661409341c317fcacf855b00c0f8699410982668af23d3e4b8d26805543618412ac724d4946f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b26149480f489a673042c2e5f17e5b2a5e49d71bf0611a494b51df3658799cccb48c172d54e3bc89649f04eb494d23cf44b862ba86703f11f6e94a4a833f4fe2244c0";

    /// #2, round 4.
    pub const BLOCK_2_HASH: &str = "0x042d032a8d2a2e413b7e778f67f63f0314ecce78a56bb8a21e30249ff9048d71";
    pub const BLOCK_2: &str = "0xf90379a0684d18e0081cbe82cab66173647eaf2b078413da5f79a1082a5228314c23ae15a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d4934794d23cf44b862ba86703f11f6e94a4a833f4fe2244a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421b90100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000102841908b100808464d68e41b9013c02f9013804f90134e3a0684d18e0081cbe82cab66173647eaf2b078413da5f79a1082a5228314c23ae150201f9010cb8415b9502064749ae6383ca3db159e581833c4c979e6e9f9e0fcd070c26d342853f5eed92fb1aeb939679c8729b367095e557fe67e319b817aad4a1b81e8ba9332f00b841777e3a0539c8f1153541830fd16b6dc86e342660942b7e27c1f17a1c8535c2ac6158e420fe5365837bb6d65fb56d973e5e9b7cfceaf4820a39629efee242415000b84116042a34235dc29153c2cc05feb2c75a3a2d6521be5913525701beaf3d65636a012487b0f13489d67f4491444ce3739013af905eb422cf0b21f200f8ab03870c01b841860741faafd4f5ce5d612330f86aee3c9eff6aa8af2bb6a565841215c98ebb7a45f9a937de49e57285834fcc8f174164cab8b454625053ce8d6985aaebe3d7bc0180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b84126f7a1c93f2b691484ed935fdecc60bb8b0b146cdb249214a2fae058445d645350a8abfda8d853141e3e1a50037567ea21e2f66229b0f93353b373365b2bc06800c0c0c0";

    /// #3, round 5.
    pub const BLOCK_3_HASH: &str = "0x943df401cff04f6f72268e63e1f2737c7bee3347de6175779af3f0247588c3c5";
    pub const BLOCK_3: &str = "0xf90379a0042d032a8d2a2e413b7e778f67f63f0314ecce78a56bb8a21e30249ff9048d71a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479410982668af23d3e4b8d26805543618412ac724d4a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a0aa5c22a6b44642cb26e615b25909c4ce85fa09c6d07be8dd277c16a41913b752a0f1e9711aafd2cc3a654c508ff781ff01ebaf495cc3a80f1ac689b745b2f3c8e7b90100010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000103841908b100808464d68e43b9013c02f9013805f90134e3a0042d032a8d2a2e413b7e778f67f63f0314ecce78a56bb8a21e30249ff9048d710402f9010cb84168483ea8067e3432d01a1ed3e401e4373c87bfbc55f8082cf9f2b3d1f402c681480297e1239f13bc9d619789f59f2fbdb1f48fcae327d746094cfacce4a6bb7601b841b329b2b5ca5750dcc45600a63cf36cb633e1ba932e0273c06cf040f62e18d0604391ef2af450c815b895e06000f4e34dcd13ef299d5dcc6e9db6561c13080a4400b841576e03c4ecc1f124fb41218004de36f818bae7e61b6c40a1deb06bf7aa05e1d87cee514d6c36098cde2c6537fb6c556774a4d382dbdeae37b6c676d5d509e1c200b841f354a8eaa22bfd983cb6669974b7de78e229094e315d095646c970a96e3615021de832730b17fa1833b3032d9c25e1b1887418747a845761cf546bd4ba83d5e20180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841d1570a04d189780140c9c71120b24edef830c1320fd28a928cd31e88e1b2f3a768967615e887f466d78b57a5bbf54a0750be466f2a90e961acf8bc1203166dff01c0c0c0";

    /// #4, round 6.
    pub const BLOCK_4_HASH: &str = "0x5c0edc00bb0dae82277c4018f52af29663fdab3ddd8c3a6b5992b5954a2bc347";
    pub const BLOCK_4: &str = "0xf90379a0943df401cff04f6f72268e63e1f2737c7bee3347de6175779af3f0247588c3c5a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347946f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b2614a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a0774ec1306070d707c45375189ea663a3a74c7c2c03a1727606a73bef6ffe43bfa0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab90100010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000104841908b100808464d68e45b9013c02f9013806f90134e3a0943df401cff04f6f72268e63e1f2737c7bee3347de6175779af3f0247588c3c50503f9010cb841af3c37e0578631f766aa0bcb67e451a003da396b1fc10d2b1cadd9f9cd0fe1d2368792de099fed569d6d9623dedde2db871aef9b26f23d0c7419cf57ecfa67f401b84106891a6d4bc73bc4295f9d00b17d62fffbdd34032803c35cc7cbc7eec57b7ca70d236906e9ab55ae61eab0a95a031fc1394c64b06dcdd08be9d298a9c5067f7a00b84166b00fa8f3338824792e82b4e8b31c45f8a0ced6cb163c0399de258b0611173d527558063504fba8745b18dc7179b268afe48f76744cf52bfb4ad78fc9cccd5100b841cb27696ff615ee3b4780bd31db1c67823b8d40389ac4b9e4df7d922f02f712463c4c4f658ae582b3bd8ec8bd1382feabf960353511156aa59fd87da60abc272b0180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b84147a9f90eae46c16b2b34158606284a62d3bee421fadc28d588cde83a203db6d11d0e549bd6f05bb8341789935faebb2310cbb72a923a083e9e20869eba1833ea01c0c0c0";

    /// #5, round 7.
    pub const BLOCK_5_HASH: &str = "0x6a934006663945eb90fbc61dcff205ad7670830642b35e06d2d3fe5707cd7a0b";
    pub const BLOCK_5: &str = "0xf90379a05c0edc00bb0dae82277c4018f52af29663fdab3ddd8c3a6b5992b5954a2bc347a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479480f489a673042c2e5f17e5b2a5e49d71bf0611a4a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a0f8decd77dd41d9af5111633085d026e6d51c46c72df707e341e4e429e148471ea0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab90100010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000105841908b100808464d68e47b9013c02f9013807f90134e3a05c0edc00bb0dae82277c4018f52af29663fdab3ddd8c3a6b5992b5954a2bc3470604f9010cb841000d7dc02cf85bd31f296f38cbcac70731da3890fab990918e5d3e6c45ad6666083030dfdbd419ffd285dba33444b4bd8314f2ba790a013379eafca701b2979201b841fbf5be8f55b05e7e25a11c0b9944120bc3493dd8f142423473dc4ad3ead4d45d56c0f58a5cc0762b8e162a66fa571e5a7c91e3161be455d8e3aeebc29657e16901b84122ba8ebd01d3329140b5396168e71d6733656ec3441bf999c0fda45cbe0bd93829a1c24e046ec01953b159389a24762da44f5c50efcef025cf103c4ad024f5d900b841ff2d8e3ff4b02bd745fe260378e435536476f4c48d1934a60cd396c5c12936ed079c0d93d143d1266b0ca9a90ae80f8f424986cde01363bd5305e7dffd653ea90180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b8413a919aa9491748d75f986e7a20c298ed7c8928f45ea339bb7e994308714a988e794c7d15a8e6f4f95a244d1a1139b092181ea4863a12238cf96c22c63b6912be00c0c0c0";
}

/// Lite storage run: bootstrap #1, checkpoint #451 (round 452) re-announcing the same five validators, then #452..#454 in consecutive rounds with three of five signatures.
pub mod lite {
    /// Initial validator set.
    pub const VALIDATORS: [&str; 5] = [
        "0x10982668af23d3e4b8d26805543618412ac724d4",
        "0x6f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b2614",
        "0x80f489a673042c2e5f17e5b2a5e49d71bf0611a4",
        "0xb51df3658799cccb48c172d54e3bc89649f04eb4",
        "0xd23cf44b862ba86703f11f6e94a4a833f4fe2244",
    ];

    /// #1, round 2.
    pub const BLOCK_1_HASH: &str = "0xdd3f23c5df31e010332bab5b76ede32163b985d954c556efd80e97c96f697ea4";
    pub const BLOCK_1: &str = "0xf902cfa0994512611cf80029bf4de5f214437e6c47841ab8730cd7598dfb04b606af91a3a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479480f489a673042c2e5f17e5b2a5e49d71bf0611a4a03a9114857792f2a10b4d04ded4e29cb2371535ed749a7686aa2e9885c6007e25a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421b90100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000101841908b100808464d21493aa02e802e6e3a0994512611cf80029bf4de5f214437e6c47841ab8730cd7598dfb04b606af91a38080c080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841cadb57e92efb44f8614c1c13d0fbb7f19bc7e5a2d6d84a211fda0bf59cff283c387689979dd2c989265ebdcca9aeb96d6701253502ccf83d5e052be1dfbea19d00c0f8699410982668af23d3e4b8d26805543618412ac724d4946f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b26149480f489a673042c2e5f17e5b2a5e49d71bf0611a494b51df3658799cccb48c172d54e3bc89649f04eb494d23cf44b862ba86703f11f6e94a4a833f4fe2244c0";

    /// #451, round 452.
    pub const BLOCK_451_HASH: &str = "0x6ca55725e3bb57a30d6a325843e8b330e1016b91750f5bd3ed0595532bc4b458";
    pub const BLOCK_451: &str = "0xf903a4a0eb684d0ff10fce899d2e0441d956a36f82b4cde153342f0a574be2fe221e4baba01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479480f489a673042c2e5f17e5b2a5e49d71bf0611a4a0cb45ef66afde6db6327d9b35a5ff58804f1026e07282ea064d5f6c3e0a1ac310a0e01a7fa2be74214bce49d387d48cd9ae50516b9a8026bdafd9cf1fbf85320640a04a2650b45992260035532dad6473d2dfd0cfc1e49abd9900ff121506ee44df82b9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004000000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000800000000000000000000000020000000000000004000000000000000000000000000000000000000000000000000000000000000018201c3841908b100808464d21820b8fc02f8f98201c4f8f4e7a0eb684d0ff10fce899d2e0441d956a36f82b4cde153342f0a574be2fe221e4bab8201c38201c2f8c9b841055b9bb42081c36c48c56d26de648cf8124235b8404950d88eedc446d7d7bdb97688f36b0208fd3f12d4895a0e43cccb9c6b3111c1ae34bd4583e34ad1801dd701b8413671a53a98f3b2f89d472722ea9454372b9f0087e272a41ca00b0e017b4255d11890b1607939c541f72963cc54ba4af419eb57f19cb8017568133ff26c51e0ee01b841d39c442e23c11566cfdad3511f5a2bc71dd9a08fb92c2696c3187f76cde2dc0c3e2497e92fbb5cea69b8bf7f90b090c17a6ecdd68d585180cc5a1723ab15fd2a0180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b8414fc163637018bbc14e0773a5a8be1e5c7c6431936bffa05c7f4ab1e672aba9570f66b29729d72b6108608470d2480a85d0da3b28f5981d1401806cc9d7a217ae01c0f86994d23cf44b862ba86703f11f6e94a4a833f4fe224494b51df3658799cccb48c172d54e3bc89649f04eb49480f489a673042c2e5f17e5b2a5e49d71bf0611a4946f3c1d8ba6cc6b6fb6387b0fe5d2d37a822b26149410982668af23d3e4b8d26805543618412ac724d4c0";

    /// #452, round 453.
    pub const BLOCK_452_HASH: &str = "0x61d7ef7440afd84981e8d0a095c8396055065693e1bb4758ef0896a53ce995de";
    pub const BLOCK_452: &str = "0xf9033aa06ca55725e3bb57a30d6a325843e8b330e1016b91750f5bd3ed0595532bc4b458a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d4934794b51df3658799cccb48c172d54e3bc89649f04eb4a0cb45ef66afde6db6327d9b35a5ff58804f1026e07282ea064d5f6c3e0a1ac310a050042539782409b0daad9b3c89c8fc257ef6bcea7bda01f1a470fa6d11862403a0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000000000000018201c4841908b100808464d21822b8fc02f8f98201c5f8f4e7a06ca55725e3bb57a30d6a325843e8b330e1016b91750f5bd3ed0595532bc4b4588201c48201c3f8c9b841a1661f214c57d5b55a0956cdd433b475cabc1f27a6ec1f15fd4189d071fbfcf53fb57a7c34fa7817bdc97c80e355ecf004166e0ff0559c68c84a47d6f46ca7fa00b84163547ef90b0185ea3ec26b320939466197a57942ff19814a7ededa9abc279e6b1805efe9b4afbee218b04620dcd9771a57b841b1ac3dd993a010c043e2095f0e01b8417645858a0a74e8729a3f1bbccce8c86dbbd9dd4eb24fbee14ad9e1916590e89f490875671595bc65f5a26b84855f5dea3b16f9dc2007f8cbca5b77e0559de7350080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b84129f1ffda2df8b138419a21d638e4f01e28a41195b3fe6480e4dd35d502148edf54e97e6fb3aa2c04b46494ab40ea7ffb3127a75d05451905b761db032706ac2401c0c0c0";

    /// #453, round 454.
    pub const BLOCK_453_HASH: &str = "0x1469d35c3d36273143d2aacc9e9d4d4bba766d320a057635f8a4c84ec4d7203b";
    pub const BLOCK_453: &str = "0xf9033aa061d7ef7440afd84981e8d0a095c8396055065693e1bb4758ef0896a53ce995dea01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d4934794d23cf44b862ba86703f11f6e94a4a833f4fe2244a0cb45ef66afde6db6327d9b35a5ff58804f1026e07282ea064d5f6c3e0a1ac310a092f99544ffc32f7f44c697ebfe14b3ff1f7453318dbee36faee56f2741b43a1da0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000000000000018201c5841908b100808464d21824b8fc02f8f98201c6f8f4e7a061d7ef7440afd84981e8d0a095c8396055065693e1bb4758ef0896a53ce995de8201c58201c4f8c9b8418ba2fcb977ba49455b5fd62338cc537813c32bf31c529ceea89dec4b50c629945e6db0017f196deb898574f350ab08b9bc828e6592e6ccd26ce029aaa2499aee01b8417d4cc3f05e761611a73e248862f193a5cf95057178d76a108fdd710e79a0a8d82aaf02f275dddaace6fb6c13464cb3b36a86d410429fcc5c0b7cb4aab6cc6af001b8410d55434a73ff58d03d41b1c9b665a1c6964bf32b687705a65375f0cf3e843013716cf195de62b102ca68aa462e48d9d492d55fdfca2d91e82c168e8005d8ec290180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841600afc80b4aa38598301ba77760fd177352b315b5493e5649533f03bd0c9b40e18ea3f28103383e3b384e26449a6f7a6de46cfb2619539acba8ea87483fdfc4800c0c0c0";

    /// #454, round 455.
    pub const BLOCK_454_HASH: &str = "0x8be6d51878f15e92dd2ca97987767056626c98bb1ecca7a378fd7ba4ca414043";
    pub const BLOCK_454: &str = "0xf9033aa01469d35c3d36273143d2aacc9e9d4d4bba766d320a057635f8a4c84ec4d7203ba01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479410982668af23d3e4b8d26805543618412ac724d4a0cb45ef66afde6db6327d9b35a5ff58804f1026e07282ea064d5f6c3e0a1ac310a0701868079efa449ccf7da5408d2d9ae609f343e8dab595519677d1ada6ba39cda0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000000000000018201c6841908b100808464d21826b8fc02f8f98201c7f8f4e7a01469d35c3d36273143d2aacc9e9d4d4bba766d320a057635f8a4c84ec4d7203b8201c68201c5f8c9b841f054a67b9bf52534134acabfb085859600c0cff509344537c9c60952f547e4741f2b106e8115ca338ee0ba97eac191b84600ab84b85fd489b070d873b8bdebe800b84146feab5a830f0acd4a13363a5a21c518b0652bcc9ac2c80810ab7cda212483603780c51a73023c51819c74a3e0fd8425dde9e481fe6a0d371ec3b81a9aebacad01b841754cf516f2aa7775ae8b54465b7c6e2d0abd1898f5a1dffebc0e462c7233d5000e29704be2f6fc4fcfdfb115174453b8f26d4290e473f44ebedbf02c15cf7d1a0080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841d94e877bd1981e4f08e1754551d7b8eb4a9ed2ed3a452549277e69c006a308a177c6639a55cbb4ad4bcf02115d6d35d256b01289eddfec75b64ecfc75535502100c0c0c0";
}

/// Periodic storage run: a different validator set, bootstrap #1, checkpoint #451 (round 459), then #452..#454 in consecutive rounds.
pub mod periodic {
    /// Initial validator set.
    pub const VALIDATORS: [&str; 5] = [
        "0x30f21e514a66732da5dff95340624fa808048601",
        "0x25b4cbb9a7ae13feadc3e9f29909833d19d16de5",
        "0x3d9fd0c76bb8b3b4929ca861d167f3e05926cb68",
        "0x3c03a0abac1da8f2f419a59afe1c125f90b506c5",
        "0x2af0cacf84899f504a6dc95e6205547bdfe28c2c",
    ];

    /// #1, round 2.
    pub const BLOCK_1_HASH: &str = "0xc675e0d31190ecec068cb7fe259ea5a029bc714b1b5ca99bad0a8d0c6d1eb221";
    pub const BLOCK_1: &str = "0xf90339a077ebec526c2409e6dcd7dad995a83247d0c7899817d4ae19d1460925d6da66f0a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479430f21e514a66732da5dff95340624fa808048601a049a9fd6e97475603fcd7ff1415da69ea09ccb67d166ee6f969e2a08997bdbeb0a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421a056e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421b90100000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000101841908b100808464be8aa9aa02e802e6e3a077ebec526c2409e6dcd7dad995a83247d0c7899817d4ae19d1460925d6da66f08080c080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b84177cbcf7d672d8c1b48de8930ee617076a77bd8c4df11a5808b22ae2daebe71c071ba8f1b53e9fbedfeb5be1e26985b0f2f4720cf4a544bf727096e0d092cd85f00f8699425b4cbb9a7ae13feadc3e9f29909833d19d16de5942af0cacf84899f504a6dc95e6205547bdfe28c2c9430f21e514a66732da5dff95340624fa808048601943c03a0abac1da8f2f419a59afe1c125f90b506c5943d9fd0c76bb8b3b4929ca861d167f3e05926cb68f8699425b4cbb9a7ae13feadc3e9f29909833d19d16de5942af0cacf84899f504a6dc95e6205547bdfe28c2c9430f21e514a66732da5dff95340624fa808048601943c03a0abac1da8f2f419a59afe1c125f90b506c5943d9fd0c76bb8b3b4929ca861d167f3e05926cb68c0";

    /// #451, round 459.
    pub const BLOCK_451_HASH: &str = "0x6e6e8448574a57e2c3cf4cfdb2155c6bd5b636d4467257c3f3fe885059fe56ed";
    pub const BLOCK_451: &str = "0xf903a4a0dd37cb87e01ce11ebafdfe4479b663dfd9f32a3a70d1648f9692f8628b25a669a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347943d9fd0c76bb8b3b4929ca861d167f3e05926cb68a031767fdd93b983bbde8462c60102a7b98992c6d8c047858870995fd600dd5c18a02200f18d3f0c6f92e9a904f4ae266654ae181b214fc138d7d8d506f24f3b2299a04a2650b45992260035532dad6473d2dfd0cfc1e49abd9900ff121506ee44df82b9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004000000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000800000000000000000000000020000000000000004000000000000000000000000000000000000000000000000000000000000000018201c3841908b100808464be8e78b8fc02f8f98201cbf8f4e7a0dd37cb87e01ce11ebafdfe4479b663dfd9f32a3a70d1648f9692f8628b25a6698201ca8201c2f8c9b841bda00c4e0b2f4d7c0e0cb9469783a62a957011cb413e89dc3fc206e0d551524768caa9705a154f3a220953c3a05aafb6b06ea1477fc8334483e513381acee1d400b84180a246e11ff55881b0f11aa70f03bdc89c40d22454905aee01dfbe7c84069d5e6d43bcfc06638f118f541aec24d09b858ee7ccaeb1a7e3f2e71df9695252dbc801b841fd544a4686b09373fa3026a9129ad4df01dc065391313669e9517f2003f2032875b171b2ef981b21340e0589214fe734a3170d5aa0976dba2a0fda0ac31df9f10080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841df638329ff644938ee3f6e9c2143293c935919246ac116c12041c9010e62cb846a7f7abe9940853e6801bd6daf16b7185e9a2f62e52b16ee4b813d8c721544cc01c0f869943d9fd0c76bb8b3b4929ca861d167f3e05926cb68943c03a0abac1da8f2f419a59afe1c125f90b506c59430f21e514a66732da5dff95340624fa808048601942af0cacf84899f504a6dc95e6205547bdfe28c2c9425b4cbb9a7ae13feadc3e9f29909833d19d16de5c0";

    /// #452, round 460.
    pub const BLOCK_452_HASH: &str = "0x1bb8989beae8097df20d968bcaab619cf407d1bdccb7f18730060773fcdd5619";
    pub const BLOCK_452: &str = "0xf9033aa06e6e8448574a57e2c3cf4cfdb2155c6bd5b636d4467257c3f3fe885059fe56eda01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479425b4cbb9a7ae13feadc3e9f29909833d19d16de5a031767fdd93b983bbde8462c60102a7b98992c6d8c047858870995fd600dd5c18a089061db7ff980f9d39960313767a9ac1f0f3a3968f4e82a19af0c3fe7dcda7b4a0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000000000000018201c4841908b100808464be8e7ab8fc02f8f98201ccf8f4e7a06e6e8448574a57e2c3cf4cfdb2155c6bd5b636d4467257c3f3fe885059fe56ed8201cb8201c3f8c9b84156e591ad059b5011b2c51316a89c554206bafdabc4cb9cbb599e9ee8c6a88a031c34055cf1f59425b11eafe811e018849d823b68d5afe00a749a0a68ec8016ba01b841a1e42d19c8256a22e6f44aa3f8e4c1e21e518bf2e99d1fc0dadc3076dfb02a3935744d95b818cce2f1dd7a2a83c01819886bcc68baff2f73378856c63ee051a801b8417c603ab72644c9aa3bdd6c7eef74de0df95d0f8ad08ecd140d1a605ce8accb5442e12e8be5eab014b092539fa4732a13586968f0e0252d2d9b6ab59a6544ed020180a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841f01611afbe949efa6ca19abeba52e1d73c6e56db8445e9112395f740a9fe270435c14b1fafc346234b7dd4e236f04c72d137e7f4f4d213d445f603a12ffe37a700c0c0c0";

    /// #453, round 461.
    pub const BLOCK_453_HASH: &str = "0x7cc6b467bfd6d13def6829785a6e181a6512357d1c2d9d596b950020eafcc237";
    pub const BLOCK_453: &str = "0xf9033aa01bb8989beae8097df20d968bcaab619cf407d1bdccb7f18730060773fcdd5619a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347942af0cacf84899f504a6dc95e6205547bdfe28c2ca031767fdd93b983bbde8462c60102a7b98992c6d8c047858870995fd600dd5c18a0cfe4fdeb32e4ce7dcdfcc5adcb5ebe91d2a953dce23037d8652c1cd6c356eceaa0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000000000000018201c5841908b100808464be8e7cb8fc02f8f98201cdf8f4e7a01bb8989beae8097df20d968bcaab619cf407d1bdccb7f18730060773fcdd56198201cc8201c4f8c9b841215f702d5683925272c56e77b972d7ef02188c5ae4fd90093081faf6cb9b7bb16198c543ed2085c6e5e3a89d3f1110404d5f02695bf212ff6ae57b37dd34cc9f00b841dff2d316109215cd7881b7a69fe50cdee753558a1a7c5974d220b177be2d94186e5deadc986ab1da05335d83f204795dcc07ad1006472ff5c2cf68c7712c721201b841727ab6e87bb886909e99efef6c2165bd3f2c9a098f449008afc129c60cef9a9c07e38d5f12bdcfb7219f7c097a74e04b289f5a96f66244b9b73c6601b8b3c2670080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841bdefa6b827504d36f045e72d752e86e4bd2a200dfa24f81ee9a2ddca5335429f773fa267f1a0d70478d8c51a904604516cf9a1d1ebf91aa8b0fc676fd7c9717801c0c0c0";

    /// #454, round 462.
    pub const BLOCK_454_HASH: &str = "0xcf6a87d0d4ca1fc7fc9df7297dd94cd1e9f8b1362ef65100a06b3883128fdd05";
    pub const BLOCK_454: &str = "0xf9033aa07cc6b467bfd6d13def6829785a6e181a6512357d1c2d9d596b950020eafcc237a01dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d493479430f21e514a66732da5dff95340624fa808048601a031767fdd93b983bbde8462c60102a7b98992c6d8c047858870995fd600dd5c18a0ffa2be59b3b97cc024bb01d3d44a8281cacbd80cfb19c88be0a3f9d4a4b9742fa0bcd2a51669cdca54e5f28517bcd09ca95007951a7d7ec181cb3f361f783cde4ab9010001000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000000000000018201c6841908b100808464be8e7eb8fc02f8f98201cef8f4e7a07cc6b467bfd6d13def6829785a6e181a6512357d1c2d9d596b950020eafcc2378201cd8201c5f8c9b841fa6b58f6fab088afe0eeb8bd45dbd79777dd54e069860a5b68be3092986a37ed54b04b36b9dc46b40b7a53bc3d878c4711a3f5d08e9b344253554a25a83cb9b300b841adcd09c9ea70dacce1c86e985c3f8f20e4771fa5a8a34b59ffcfe9bd3fbc9c985e736c1f3a4c2e641c9ec89d77aadf6627f47b3cfd9960e6c305d95f8001010b00b8415908e58f173b81d500d7a5b0a65c8c77181e0e590a0915d43d4c490d4d18367908619ba95b478eebcd847f740486e7284f1410cf11d072cca69ed1390b7f160e0080a00000000000000000000000000000000000000000000000000000000000000000880000000000000000b841a6f80167cfabaabf3969dccec161f7e8585b364b52972d4b0c4cecf5078ae0226af1efc6c6be73bb0f9ca6c093b2a10449878596ab50494df341a4894694609901c0c0c0";
}
