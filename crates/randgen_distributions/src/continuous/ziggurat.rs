//! Ziggurat layer tables for the standard normal and exponential samplers.
//!
//! 256 layers each. `K*` are acceptance thresholds scaled to the mantissa
//! width used by the sampler (52 bits for the normal, 53 for the
//! exponential), `W*` the layer widths divided by that scale and `F*` the
//! density at each layer edge. Layer 0 is the base strip including the tail.

/// Right edge of the normal base strip.
pub(crate) const ZIGGURAT_NOR_R: f64 = 3.654152885361009;

/// `1 / ZIGGURAT_NOR_R`.
pub(crate) const ZIGGURAT_NOR_INV_R: f64 = 0.2736612373297583;

/// Right edge of the exponential base strip.
pub(crate) const ZIGGURAT_EXP_R: f64 = 7.69711747013105;

/// Normal acceptance thresholds.
#[rustfmt::skip]
pub(crate) const KI_DOUBLE: [u64; 256] = [
    0x000ef33d8025ef65, 0x0000000000000000, 0x000c08be98fbc6c6, 0x000da354fabd814b,
    0x000e51f67ec1eeef, 0x000eb255e9d3f780, 0x000eef4b817ecaba, 0x000f19470afa44ac,
    0x000f37ed61ffcb17, 0x000f4f469561255b, 0x000f61a5e41ba396, 0x000f707a755396a4,
    0x000f7cb2ec28449b, 0x000f86f10c6357d3, 0x000f8fa6578325dd, 0x000f9724c74dd0da,
    0x000f9da907dbf508, 0x000fa360f581fa72, 0x000fa86fde5b4bf8, 0x000facf160d354dc,
    0x000fb0fb6718b90e, 0x000fb49f8d5374c5, 0x000fb7ec2366fe77, 0x000fbaece9a1e50c,
    0x000fbdab9d040bed, 0x000fc03060ff6c57, 0x000fc2821037a248, 0x000fc4a67ae25bd1,
    0x000fc6a2977aee30, 0x000fc87aa92896a4, 0x000fca325e4bde85, 0x000fcbcce902231a,
    0x000fcd4d12f839c4, 0x000fceb54d8fec99, 0x000fd007bf1dc930, 0x000fd1464dd6c4e5,
    0x000fd272a8e2f450, 0x000fd38e4ff0c91e, 0x000fd49a9990b479, 0x000fd598b8920f52,
    0x000fd689c08e99ec, 0x000fd76ea9c8e832, 0x000fd848547b08e8, 0x000fd9178bad2c8b,
    0x000fd9dd07a7add2, 0x000fda9970105e8b, 0x000fdb4d5dc02e1f, 0x000fdbf95c5bfcd0,
    0x000fdc9debb99a7d, 0x000fdd3b8118729d, 0x000fddd288342f8f, 0x000fde6364369f63,
    0x000fdeee708d514e, 0x000fdf7401a6b42e, 0x000fdff46599ed3e, 0x000fe06fe4bc24f1,
    0x000fe0e6c225a258, 0x000fe1593c28b84b, 0x000fe1c78cbc3f98, 0x000fe231e9db1ca9,
    0x000fe29885da1b91, 0x000fe2fb8fb54186, 0x000fe35b33558d4a, 0x000fe3b799d0002a,
    0x000fe410e99ead7e, 0x000fe46746d47734, 0x000fe4bad34c095b, 0x000fe50baed29524,
    0x000fe559f74ebc77, 0x000fe5a5c8e41212, 0x000fe5ef3e138689, 0x000fe6366fd91077,
    0x000fe67b75c6d578, 0x000fe6be661e11aa, 0x000fe6ff55e5f4f2, 0x000fe73e5900a701,
    0x000fe77b823e9e39, 0x000fe7b6e37070a1, 0x000fe7f08d774242, 0x000fe8289053f08c,
    0x000fe85efb35173b, 0x000fe893dc840864, 0x000fe8c741f0cebc, 0x000fe8f9387d4ef6,
    0x000fe929cc879b1c, 0x000fe95909d388ea, 0x000fe986fb939aa1, 0x000fe9b3ac714865,
    0x000fe9df2694b6d5, 0x000fea0973abe67b, 0x000fea329cf166a4, 0x000fea5aab32952c,
    0x000fea81a6d57419, 0x000feaa797de1cef, 0x000feacc85f3d91f, 0x000feaf07865e63c,
    0x000feb13762fec12, 0x000feb3585fe2a4a, 0x000feb56ae3162b4, 0x000feb76f4e284f9,
    0x000feb965fe62013, 0x000febb4f4cf9d7c, 0x000febd2b8f449cf, 0x000febefb16e2e3d,
    0x000fec0be31ebde8, 0x000fec2752b15a14, 0x000fec42049dafd3, 0x000fec5bfd29f196,
    0x000fec75406ceef4, 0x000fec8dd2500cb4, 0x000feca5b6911f10, 0x000fecbcf0c427fe,
    0x000fecd38454fb15, 0x000fece97488c8b3, 0x000fecfec47f91b7, 0x000fed1377358528,
    0x000fed278f844903, 0x000fed3b10242f4c, 0x000fed4dfbad586d, 0x000fed605498c3dc,
    0x000fed721d414fe8, 0x000fed8357e4a981, 0x000fed9406a42cc8, 0x000feda42b85b704,
    0x000fedb3c8746ab3, 0x000fedc2df416652, 0x000fedd171a46e52, 0x000feddf813c8ad2,
    0x000feded0f90997f, 0x000fedfa1e0fd413, 0x000fee06ae124bc4, 0x000fee12c0d95a06,
    0x000fee1e579006df, 0x000fee29734b6524, 0x000fee34150ae4bb, 0x000fee3e3db89b3c,
    0x000fee47ee2982f3, 0x000fee51271db086, 0x000fee59e9407f41, 0x000fee623528b42d,
    0x000fee6a0b5897f0, 0x000fee716c3e077a, 0x000fee7858327b81, 0x000fee7ecf7b06b9,
    0x000fee84d2484ab2, 0x000fee8a60b66342, 0x000fee8f7accc851, 0x000fee94207e25da,
    0x000fee9851a829eb, 0x000fee9c0e13485b, 0x000fee9f557273f3, 0x000feea22762ccae,
    0x000feea4836b42ab, 0x000feea668fc2d71, 0x000feea7d76ed6f9, 0x000feea8ce04fa0a,
    0x000feea94be8333b, 0x000feea95029640f, 0x000feea8d9c0075d, 0x000feea7e7897653,
    0x000feea678481d24, 0x000feea48aa29e82, 0x000feea21d22e4d9, 0x000fee9f2e352024,
    0x000fee9bbc26af2e, 0x000fee97c524f2e3, 0x000fee93473c0a39, 0x000fee8e40557515,
    0x000fee88ae369c79, 0x000fee828e7f3dfc, 0x000fee7bdea7b887, 0x000fee749bff37ff,
    0x000fee6cc3a9bd5e, 0x000fee64529e007f, 0x000fee5b45a32888, 0x000fee51994e57b5,
    0x000fee474a0006ce, 0x000fee3c53e12c4f, 0x000fee30b2e02ad7, 0x000fee2462ad8204,
    0x000fee175eb83c59, 0x000fee09a22a1447, 0x000fedfb27e349cb, 0x000fedebea76216c,
    0x000feddbe422047d, 0x000fedcb0ece39d3, 0x000fedb964042cf3, 0x000feda6dce938c9,
    0x000fed937237e98c, 0x000fed7f1c38a836, 0x000fed69d2b9c02a, 0x000fed538d06adff,
    0x000fed3c41dea422, 0x000fed23e76a2fd7, 0x000fed0a732fe643, 0x000fecefda07fe33,
    0x000fecd4100eb7b8, 0x000fecb708956eb4, 0x000fec98b61230c0, 0x000fec790a0da978,
    0x000fec57f50f31fd, 0x000fec356686c961, 0x000fec114cb4b334, 0x000febeb948e6fd0,
    0x000febc429a0b691, 0x000feb9af5ee0cdc, 0x000feb6fe1c98542, 0x000feb42d3ad1f9e,
    0x000feb13b00b2d4b, 0x000feae2591a02e8, 0x000feaaeae992256, 0x000fea788d8ee326,
    0x000fea3fcffd73e5, 0x000fea044c8dd9f6, 0x000fe9c5d62f563a, 0x000fe9843ba947a3,
    0x000fe93f471d4728, 0x000fe8f6bd76c5d6, 0x000fe8aa5dc4e8e6, 0x000fe859e07ab1ea,
    0x000fe804f690a93f, 0x000fe7ab488233bf, 0x000fe74c751f6aa5, 0x000fe6e8102aa201,
    0x000fe67da0b6abd8, 0x000fe60c9f38307d, 0x000fe5947338f742, 0x000fe51470977280,
    0x000fe48bd436f457, 0x000fe3f9bffd1e37, 0x000fe35d35eeb19b, 0x000fe2b5122fe4fd,
    0x000fe20003995557, 0x000fe13c82788314, 0x000fe068c4ee67af, 0x000fdf82b02b71aa,
    0x000fde87c57efeaa, 0x000fdd7509c63bfd, 0x000fdc46e529bf12, 0x000fdaf8f82e0282,
    0x000fd985e1b2ba75, 0x000fd7e6ef48cf04, 0x000fd613adbd650b, 0x000fd40149e2f011,
    0x000fd1a1a7b4c7ac, 0x000fcee204761f9e, 0x000fcba8d85e11b1, 0x000fc7d26ecd2d22,
    0x000fc32b2f1e22ec, 0x000fbd6581c0b839, 0x000fb606c4005433, 0x000fac40582a2873,
    0x000f9e971e014597, 0x000f89fa48a41dfb, 0x000f66c5f7f0302c, 0x000f1a5a4b331c49,
];

/// Normal layer widths.
#[rustfmt::skip]
pub(crate) const WI_DOUBLE: [f64; 256] = [
    8.683627060801315e-16, 4.779330175727817e-17, 6.354352417405312e-17, 7.454870481247737e-17,
    8.329366815793134e-17, 9.068060405059514e-17, 9.714860076567794e-17, 1.0294750314241046e-16,
    1.0823430288447711e-16, 1.1311470196109058e-16, 1.1766359457022946e-16, 1.2193617278714386e-16,
    1.2597439914637113e-16, 1.2981099886264051e-16, 1.3347203736824142e-16, 1.3697864842571223e-16,
    1.4034823001242402e-16, 1.4359529452056965e-16, 1.4673208742364442e-16, 1.4976904668391056e-16,
    1.527151500359622e-16, 1.5557818169460786e-16, 1.5836494009290908e-16, 1.6108140175274953e-16,
    1.6373285203969875e-16, 1.6632399058420855e-16, 1.6885901708676616e-16, 1.7134170176559678e-16,
    1.737754436586488e-16, 1.7616331923001016e-16, 1.7850812316976747e-16, 1.808124028579917e-16,
    1.830784876482677e-16, 1.8530851388618039e-16, 1.87504446393739e-16, 1.8966809700774777e-16,
    1.918011406483864e-16, 1.9390512930625123e-16, 1.959815042662884e-16, 1.9803160683128189e-16,
    2.0005668776273345e-16, 2.0205791562071666e-16, 2.0403638415480224e-16, 2.059931188740372e-16,
    2.0792908290414032e-16, 2.0984518222370366e-16, 2.1174227035760354e-16, 2.136211525944988e-16,
    2.154825897858147e-16, 2.173273017756438e-16, 2.1915597050427286e-16, 2.2096924282235332e-16,
    2.227677330478957e-16, 2.2455202529414375e-16, 2.26322675592857e-16, 2.280802138345019e-16,
    2.2982514554424704e-16, 2.3155795351040823e-16, 2.3327909928004376e-16, 2.3498902453470975e-16,
    2.366881523579162e-16, 2.3837688840454263e-16, 2.4005562198135078e-16, 2.417247270467504e-16,
    2.4338456313711043e-16, 2.450354762261497e-16, 2.466777995232707e-16, 2.483118542161089e-16,
    2.4993795016204544e-16, 2.5155638653296593e-16, 2.5316745241713597e-16, 2.547714273816946e-16,
    2.5636858199893983e-16, 2.579591783392868e-16, 2.5954347043351717e-16, 2.611217047067021e-16,
    2.626941203859727e-16, 2.642609498841191e-16, 2.658224191608309e-16, 2.673787480632365e-16,
    2.6893015064726174e-16, 2.7047683548119967e-16, 2.7201900593277335e-16, 2.7355686044086806e-16,
    2.750905927730168e-16, 2.766203922696392e-16, 2.781464440759545e-16, 2.796689293624231e-16,
    2.8118802553450217e-16, 2.82703906432448e-16, 2.842167425218407e-16, 2.857267010754602e-16,
    2.8723394634709804e-16, 2.8873863973784824e-16, 2.902409399553843e-16, 2.917410031666946e-16,
    2.9323898314471826e-16, 2.947350314092936e-16, 2.962292973628067e-16, 2.97721928420903e-16,
    2.992130701386014e-16, 3.007028663321332e-16, 3.0219145919680625e-16, 3.036789894211803e-16,
    3.0516559629782197e-16, 3.0665141783089555e-16, 3.081365908408298e-16, 3.0962125106629235e-16,
    3.111055332636894e-16, 3.125895713044e-16, 3.1407349826994477e-16, 3.155574465452802e-16,
    3.17041547910403e-16, 3.1852593363044075e-16, 3.2001073454440124e-16, 3.214960811527448e-16,
    3.229821037039416e-16, 3.2446893228016983e-16, 3.2595669688230794e-16, 3.2744552751437077e-16,
    3.2893555426753707e-16, 3.3042690740391294e-16, 3.319197174401753e-16, 3.334141152312373e-16,
    3.349102320540779e-16, 3.3640819969187656e-16, 3.3790815051859503e-16, 3.39410217584149e-16,
    3.409145347003127e-16, 3.424212365275019e-16, 3.439304586625832e-16, 3.4544233772785845e-16,
    3.4695701146137845e-16, 3.4847461880874147e-16, 3.499953000165382e-16, 3.5151919672760754e-16,
    3.530464520782741e-16, 3.5457721079774367e-16, 3.5611161930983894e-16, 3.5764982583726515e-16,
    3.5919198050860314e-16, 3.6073823546823534e-16, 3.6228874498941935e-16, 3.6384366559073464e-16,
    3.6540315615613714e-16, 3.6696737805887024e-16, 3.6853649528949155e-16, 3.7011067458829e-16,
    3.716900855823824e-16, 3.7327490092779445e-16, 3.7486529645684897e-16, 3.764614513312029e-16,
    3.780635482008961e-16, 3.7967177336979448e-16, 3.812863169678378e-16, 3.8290737313052437e-16,
    3.8453514018609596e-16, 3.8616982085091493e-16, 3.878116224335587e-16, 3.894607570481926e-16,
    3.9111744183782054e-16, 3.927818992080542e-16, 3.9445435707208776e-16, 3.9613504910761354e-16,
    3.978242150264683e-16, 3.995221008578565e-16, 4.0122895924606296e-16, 4.0294504976363284e-16,
    4.0467063924107504e-16, 4.0640600211422504e-16, 4.0815142079049387e-16, 4.0990718603532664e-16,
    4.116735973803025e-16, 4.134509635544235e-16, 4.152396029402687e-16, 4.1703984405683144e-16,
    4.188520260710111e-16, 4.206764993399014e-16, 4.2251362598620484e-16, 4.2436378050930775e-16,
    4.262273504347798e-16, 4.2810473700531167e-16, 4.2999635591638323e-16, 4.3190263810026294e-16,
    4.338240305622791e-16, 4.357609972736849e-16, 4.3771402012585875e-16, 4.3968359995105214e-16,
    4.416702576154204e-16, 4.4367453519065673e-16, 4.456969972112043e-16, 4.477382320247534e-16,
    4.49798853244555e-16, 4.518795013130059e-16, 4.539808451870034e-16, 4.561035841567423e-16,
    4.582484498109568e-16, 4.604162081631154e-16, 4.626076619547847e-16, 4.648236531543208e-16,
    4.670650656712633e-16, 4.69332828309333e-16, 4.716279179838353e-16, 4.739513632325869e-16,
    4.763042480533139e-16, 4.786877161048725e-16, 4.811029753147419e-16, 4.835513029411527e-16,
    4.860340511450813e-16, 4.885526531353604e-16, 4.911086299595271e-16, 4.937035980240336e-16,
    4.963392774403988e-16, 4.990175013091822e-16, 5.01740226071809e-16, 5.045095430818728e-16,
    5.073276915733543e-16, 5.101970732341562e-16, 5.131202686306784e-16, 5.161000557743228e-16,
    5.1913943117577e-16, 5.222416338000235e-16, 5.254101724177597e-16, 5.286488569504945e-16,
    5.3196183453384e-16, 5.353536311816497e-16, 5.388292001334053e-16, 5.423939782201712e-16,
    5.460539519074781e-16, 5.498157350892814e-16, 5.536866612467876e-16, 5.576748932926577e-16,
    5.617895553555417e-16, 5.660408920082423e-16, 5.70440462129139e-16, 5.750013768919896e-16,
    5.797385945724595e-16, 5.84669289345548e-16, 5.8981331764779e-16, 5.951938149641445e-16,
    6.008379696271909e-16, 6.067780409333449e-16, 6.130527208725281e-16, 6.197089894581626e-16,
    6.268046963301283e-16, 6.344122407127505e-16, 6.426239659548054e-16, 6.515603317344993e-16,
    6.613827885097663e-16, 6.723150462505586e-16, 6.846803417564259e-16, 6.98971833638762e-16,
    7.159994934830664e-16, 7.372424301798798e-16, 7.658936370805572e-16, 8.113849337656484e-16,
];

/// Normal density at layer edges.
#[rustfmt::skip]
pub(crate) const FI_DOUBLE: [f64; 256] = [
    1.0, 0.9771017012676708, 0.959879091800106, 0.9451989534422991,
    0.9320600759592299, 0.9199915050393465, 0.9087264400521303, 0.898095921898343,
    0.8879846607558328, 0.8783096558089168, 0.8690086880368565, 0.8600336211963311,
    0.8513462584586775, 0.8429156531122037, 0.834716292986883, 0.8267268339462209,
    0.8189291916037019, 0.8113078743126557, 0.8038494831709638, 0.7965423304229584,
    0.789376143566024, 0.782341832654802, 0.7754313049811866, 0.7686373157984857,
    0.7619533468367948, 0.7553735065070957, 0.7488924472191564, 0.7425052963401506,
    0.7362075981268621, 0.7299952645614757, 0.7238645334686297, 0.7178119326307215,
    0.711834248878248, 0.7059285013327538, 0.7000919181365112, 0.6943219161261163,
    0.6886160830046714, 0.6829721616449943, 0.6773880362187731, 0.6718617198970817,
    0.6663913439087498, 0.6609751477766628, 0.6556114705796969, 0.6502987431108164,
    0.645035480820822, 0.6398202774530561, 0.6346517992876233, 0.6295287799248362,
    0.6244500155470261, 0.619414360605834, 0.6144207238889134, 0.6094680649257731,
    0.6045553906974673, 0.5996817526191248, 0.5948462437679869, 0.5900479963328255,
    0.5852861792633709, 0.5805599961007903, 0.5758686829723532, 0.5712115067352527,
    0.5665877632561639, 0.5619967758145239, 0.5574378936187655, 0.5529104904258318,
    0.5484139632552654, 0.5439477311900258, 0.5395112342569516, 0.5351039323804572,
    0.5307253044036615, 0.526374847171684, 0.5220520746723214, 0.5177565172297559,
    0.5134877207473265, 0.5092452459957476, 0.5050286679434679, 0.5008375751261483,
    0.4966715690524893, 0.49253026364386815, 0.4884132847054576, 0.4843202694266829,
    0.4802508659090464, 0.4762047327195055, 0.47218153846772976, 0.4681809614056932,
    0.4642026890481739, 0.4602464178128425, 0.4563118526787161, 0.45239870686184824,
    0.44850670150720273, 0.4446355653957391, 0.44078503466580377, 0.43695485254798533,
    0.4331447691126521, 0.42935454102944126, 0.4255839313380218, 0.42183270922949573,
    0.41810064983784795, 0.4143875340408909, 0.410693148270188, 0.40701728432947315,
    0.4033597392211143, 0.399720314980197, 0.39609881851583223, 0.3924950614593154,
    0.38890886001878855, 0.38534003484007706, 0.38178841087339344, 0.37825381724561896,
    0.37473608713789086, 0.3712350576682392, 0.36775056977903225, 0.3642824681290037,
    0.36083060098964775, 0.3573948201457802, 0.35397498080007656, 0.3505709414814059,
    0.3471825639567935, 0.34380971314685055, 0.34045225704452164, 0.3371100666370059,
    0.33378301583071823, 0.3304709813791634, 0.3271738428136013, 0.32389148237639104,
    0.3206237849569053, 0.3173706380299135, 0.31413193159633707, 0.31090755812628634,
    0.3076974125042919, 0.3045013919766498, 0.3013193961008029, 0.2981513266966853,
    0.29499708779996164, 0.291856585617095, 0.2887297284821827, 0.2856164268155016,
    0.2825165930837074, 0.2794301417616377, 0.2763569892956681, 0.2732970540685769,
    0.2702502563658752, 0.26721651834356114, 0.2641957639972608, 0.2611879191327208,
    0.2581929113376189, 0.2552106699546617, 0.2522411260559419, 0.24928421241852824,
    0.24633986350126363, 0.24340801542275012, 0.2404886059405004, 0.23758157443123795,
    0.2346868618723299, 0.23180441082433859, 0.22893416541468023, 0.2260760713223802,
    0.22323007576391746, 0.22039612748015194, 0.21757417672433113, 0.21476417525117358,
    0.21196607630703015, 0.209179834621125, 0.20640540639788071, 0.20364274931033485,
    0.20089182249465656, 0.1981525865457751, 0.19542500351413428, 0.19270903690358912,
    0.19000465167046496, 0.18731181422380025, 0.18463049242679927, 0.18196065559952254,
    0.17930227452284767, 0.176655321443735, 0.17401977008183875, 0.17139559563750595,
    0.1687827748012115, 0.16618128576448205, 0.1635911082323657, 0.16101222343751107,
    0.1584446141559243, 0.1558882647244792, 0.15334316106026283, 0.15080929068184568,
    0.14828664273257453, 0.14577520800599403, 0.1432749789735134, 0.1407859498144447,
    0.1383081164485507, 0.13584147657125373, 0.13338602969166913, 0.1309417771736443,
    0.12850872227999952, 0.12608687022018586, 0.12367622820159654, 0.12127680548479021,
    0.11888861344290998, 0.1165116656256108, 0.11414597782783835, 0.111791568163838,
    0.10944845714681163, 0.10711666777468364, 0.1047962256224869, 0.10248715894193508,
    0.10018949876880981, 0.09790327903886228, 0.09562853671300882, 0.09336531191269086,
    0.09111364806637363, 0.08887359206827579, 0.08664519445055796, 0.08442850957035337,
    0.08222359581320286, 0.08003051581466306, 0.07784933670209604, 0.07568013035892707,
    0.07352297371398127, 0.07137794905889037, 0.06924514439700677, 0.0671246538277885,
    0.06501657797124284, 0.06292102443775811, 0.060838108349539864, 0.05876795292093376,
    0.0567106901062029, 0.054666461324888914, 0.052635418276792176, 0.05061772386094776,
    0.04861355321586852, 0.04662309490193037, 0.04464655225129444, 0.04268414491647443,
    0.04073611065594093, 0.03880270740452611, 0.036884215688567284, 0.034980941461716084,
    0.03309321945857852, 0.031221417191920245, 0.029365939758133314, 0.027527235669603082,
    0.025705804008548896, 0.023902203305795882, 0.022117062707308864, 0.020351096230044517,
    0.018605121275724643, 0.016880083152543166, 0.015177088307935325, 0.01349745060173988,
    0.011842757857907888, 0.010214971439701471, 0.008616582769398732, 0.007050875471373227,
    0.005522403299250997, 0.0040379725933630305, 0.0026090727461021627, 0.0012602859304985975,
];

/// Exponential acceptance thresholds.
#[rustfmt::skip]
pub(crate) const KE_DOUBLE: [u64; 256] = [
    0x001c5214272497c7, 0x0000000000000000, 0x00137d5bd79c317f, 0x00186ef58e3f3c10,
    0x001a9bb7320eb0ae, 0x001bd127f719447c, 0x001c951d0f88651b, 0x001d1bfe2d5c3973,
    0x001d7e5bd56b18b3, 0x001dc934dd172c71, 0x001e0409dfac9dc9, 0x001e337b71d47837,
    0x001e5a8b177cb7a3, 0x001e7b42096f046c, 0x001e970daf08ae3e, 0x001eaef5b14ef09e,
    0x001ec3bd07b46557, 0x001ed5f6f08799ce, 0x001ee614ae6e5688, 0x001ef46eca361cd0,
    0x001f014b76ddd4a4, 0x001f0ce313a796b7, 0x001f176369f1f77a, 0x001f20f20c452571,
    0x001f29ae1951a874, 0x001f31b18fb95532, 0x001f39125157c106, 0x001f3fe2eb6e694c,
    0x001f463332d788fb, 0x001f4c10bf1d3a0f, 0x001f51874c5c3322, 0x001f56a109c3ecc0,
    0x001f5b66d9099996, 0x001f5fe08210d08c, 0x001f6414dd445772, 0x001f6809f6859679,
    0x001f6bc52a2b02e7, 0x001f6f4b3d32e4f4, 0x001f72a07190f13a, 0x001f75c8974d09d7,
    0x001f78c71b045cc0, 0x001f7b9f12413ff5, 0x001f7e5346079f8a, 0x001f80e63be21139,
    0x001f835a3dad9162, 0x001f85b16056b913, 0x001f87ed89b24262, 0x001f8a10759374fa,
    0x001f8c1bba3d39ad, 0x001f8e10cc45d04a, 0x001f8ff102013e17, 0x001f91bd968358e1,
    0x001f9377ac47afd8, 0x001f95204f8b64db, 0x001f96b878633892, 0x001f98410c968892,
    0x001f99bae146ba81, 0x001f9b26bc697f00, 0x001f9c85561b717a, 0x001f9dd759cfd803,
    0x001f9f1d6761a1ce, 0x001fa058140936c0, 0x001fa187eb3a3339, 0x001fa2ad6f6bc4fc,
    0x001fa3c91ace0683, 0x001fa4db5fee6aa3, 0x001fa5e4aa4d097d, 0x001fa6e55ee46783,
    0x001fa7dddca51ec4, 0x001fa8ce7ce6a875, 0x001fa9b793ce5fef, 0x001faa9970adb858,
    0x001fab745e588232, 0x001fac48a3740585, 0x001fad1682bf9fe9, 0x001fadde3b5782c1,
    0x001faea008f21d6d, 0x001faf5c2418b07e, 0x001fb012c25b7a13, 0x001fb0c41681dff4,
    0x001fb17050b6f1fb, 0x001fb2179eb2963a, 0x001fb2ba2bdfa84b, 0x001fb358217f4e18,
    0x001fb3f1a6c9be0c, 0x001fb486e10cacd7, 0x001fb517f3c793fd, 0x001fb5a500c5fdaa,
    0x001fb62e2837fe59, 0x001fb6b388c9010a, 0x001fb7353fb50799, 0x001fb7b368dc7da8,
    0x001fb82e1ed6ba09, 0x001fb8a57b0347f6, 0x001fb919959a0f74, 0x001fb98a85ba7204,
    0x001fb9f861796f27, 0x001fba633deee286, 0x001fbacb2f41ec17, 0x001fbb3048b49145,
    0x001fbb929caea4e2, 0x001fbbf23cc8029e, 0x001fbc4f39d22995, 0x001fbca9a3e140d5,
    0x001fbd018a548f9f, 0x001fbd56fbde729c, 0x001fbdaa068bd66b, 0x001fbdfab7cb3f41,
    0x001fbe491c7364de, 0x001fbe9540c9695f, 0x001fbedf3086b128, 0x001fbf26f6de6175,
    0x001fbf6c9e828ae3, 0x001fbfb031a904c4, 0x001fbff1ba0ffdb0, 0x001fc03141024589,
    0x001fc06ecf5b54b3, 0x001fc0aa6d8b1427, 0x001fc0e42399698a, 0x001fc11bf9298a64,
    0x001fc151f57d1943, 0x001fc1861f770f4b, 0x001fc1b87d9e74b4, 0x001fc1e91620ea43,
    0x001fc217eed505de, 0x001fc2450d3c83ff, 0x001fc27076864fc2, 0x001fc29a2f90630f,
    0x001fc2c23ce98046, 0x001fc2e8a2d2c6b4, 0x001fc30d654122ed, 0x001fc33087de9c0f,
    0x001fc3520e0b7ec7, 0x001fc371fadf66f8, 0x001fc390512a2887, 0x001fc3ad137497fa,
    0x001fc3c844013349, 0x001fc3e1e4ccab40, 0x001fc3f9f78e4da8, 0x001fc4107db85061,
    0x001fc4257877fd68, 0x001fc438e8b5bfc7, 0x001fc44acf15112a, 0x001fc45b2bf447e8,
    0x001fc469ff6c4504, 0x001fc477495001b2, 0x001fc483092bfbb9, 0x001fc48d3e457ff6,
    0x001fc495e799d21b, 0x001fc49d03dd30b1, 0x001fc4a29179b433, 0x001fc4a68e8e07fc,
    0x001fc4a8f8ebfb8c, 0x001fc4a9ce16ea9f, 0x001fc4a90b41fa34, 0x001fc4a6ad4e28a0,
    0x001fc4a2b0c82e75, 0x001fc49d11e62de3, 0x001fc495cc852df5, 0x001fc48cdc265ec1,
    0x001fc4823bec237a, 0x001fc475e696dee6, 0x001fc467d6817e83, 0x001fc458059dc037,
    0x001fc4466d702e21, 0x001fc433070bcb99, 0x001fc41dcb0d6e0e, 0x001fc406b196bbf7,
    0x001fc3edb248cb62, 0x001fc3d2c43e593c, 0x001fc3b5de0591b4, 0x001fc396f599614c,
    0x001fc376005a4593, 0x001fc352f3069371, 0x001fc32dc1b22819, 0x001fc3065fbd7888,
    0x001fc2dcbfcbf263, 0x001fc2b0d3b99f9e, 0x001fc2828c8ffcf0, 0x001fc251da79f164,
    0x001fc21eacb6d39e, 0x001fc1e8f18c6756, 0x001fc1b09637bb3c, 0x001fc17586dccd10,
    0x001fc137ae74d6b7, 0x001fc0f6f6bb2415, 0x001fc0b348184da4, 0x001fc06c898baff1,
    0x001fc022a092f365, 0x001fbfd5710f72b9, 0x001fbf84dd29488f, 0x001fbf30c52fc60b,
    0x001fbed907770cc6, 0x001fbe7d80327ddb, 0x001fbe1e094ba614, 0x001fbdba7a354408,
    0x001fbd52a7b9f826, 0x001fbce663c6201b, 0x001fbc757d2c4de5, 0x001fbbffbf63b7aa,
    0x001fbb84f23fe6a2, 0x001fbb04d9a0d18d, 0x001fba7f351a70ad, 0x001fb9f3bf92b619,
    0x001fb9622ed4abfc, 0x001fb8ca33174a17, 0x001fb82b76765b54, 0x001fb7859c5b895c,
    0x001fb6d840d55594, 0x001fb622f7d96943, 0x001fb5654c6f37e1, 0x001fb49ebfbf69d2,
    0x001fb3cec803e747, 0x001fb2f4cf539c3f, 0x001fb21032442853, 0x001fb1203e5a9604,
    0x001fb0243042e1c2, 0x001faf1b31c479a7, 0x001fae045767e105, 0x001facde9dbf2d73,
    0x001faba8e640060b, 0x001faa61f399ff28, 0x001fa908656f66a2, 0x001fa79ab3508d3d,
    0x001fa61726d1f214, 0x001fa47bd48bea00, 0x001fa2c693c5c095, 0x001fa0f4f47df315,
    0x001f9f04336bbe0b, 0x001f9cf12b79f9bd, 0x001f9ab84415abc5, 0x001f98555b782fb9,
    0x001f95c3abd03f79, 0x001f92fda9cef1f3, 0x001f8ffcda9ae41d, 0x001f8cb99e7385f8,
    0x001f892aec479607, 0x001f8545f904db8f, 0x001f80fdc336039b, 0x001f7c427839e926,
    0x001f7700a3582acc, 0x001f71200f1a241c, 0x001f6a8234b7352b, 0x001f630000a8e267,
    0x001f5a66904fe3c4, 0x001f50724ece1172, 0x001f44c7665c6fdb, 0x001f36e5a38a59a2,
    0x001f26143450340a, 0x001f113e047b0414, 0x001ef6aefa57cbe7, 0x001ed38ca188151e,
    0x001ea2a61e122db1, 0x001e5961c78b267c, 0x001dddf62bac0bb1, 0x001cdb4dd9e4e8c0,
];

/// Exponential layer widths.
#[rustfmt::skip]
pub(crate) const WE_DOUBLE: [f64; 256] = [
    9.655740063209183e-16, 7.089014243955414e-18, 1.1639412496691224e-17, 1.524391512353216e-17,
    1.833284885723744e-17, 2.1089651094644866e-17, 2.3611280778431382e-17, 2.595595772310894e-17,
    2.8161735541977523e-17, 3.0255041303213823e-17, 3.225508254836375e-17, 3.417632340185027e-17,
    3.6029969787344525e-17, 3.782490776869649e-17, 3.956832198097553e-17, 4.1266117781759464e-17,
    4.2923218084425256e-17, 4.4543777432823714e-17, 4.613133981483186e-17, 4.768895725264636e-17,
    4.921928043727963e-17, 5.072462904503147e-17, 5.220704702792672e-17, 5.366834661718192e-17,
    5.511014372835095e-17, 5.653388673239667e-17, 5.794088004852767e-17, 5.933230365208943e-17,
    6.07092293284718e-17, 6.207263431163193e-17, 6.342341280303077e-17, 6.476238575956142e-17,
    6.609030925769405e-17, 6.740788167872722e-17, 6.871574991183812e-17, 7.00145147340393e-17,
    7.130473549660643e-17, 7.258693422414648e-17, 7.386159921381792e-17, 7.512918820723728e-17,
    7.639013119550826e-17, 7.764483290797848e-17, 7.88936750272979e-17, 8.013701816675454e-17,
    8.137520364041762e-17, 8.260855505210038e-17, 8.383737972539139e-17, 8.506196999385323e-17,
    8.628260436784113e-17, 8.749954859216183e-17, 8.871305660690252e-17, 8.992337142215357e-17,
    9.113072591597909e-17, 9.233534356381788e-17, 9.353743910649129e-17, 9.47372191631295e-17,
    9.593488279457997e-17, 9.713062202221521e-17, 9.832462230649511e-17, 9.951706298915072e-17,
    1.0070811770242949e-16, 1.0189795474846941e-16, 1.030867374515422e-16, 1.0427462448561886e-16,
    1.0546177017945764e-16, 1.0664832480119147e-16, 1.0783443482419485e-16, 1.0902024317583505e-16,
    1.1020588947055781e-16, 1.1139151022861975e-16, 1.1257723908165675e-16, 1.1376320696616847e-16,
    1.1494954230590093e-16, 1.1613637118402183e-16, 1.1732381750590458e-16, 1.1851200315326694e-16,
    1.1970104813034652e-16, 1.2089107070273855e-16, 1.2208218752947062e-16, 1.2327451378884152e-16,
    1.2446816329851125e-16, 1.2566324863028985e-16, 1.2685988122003975e-16, 1.2805817147307494e-16,
    1.2925822886541196e-16, 1.3046016204120288e-16, 1.3166407890665726e-16, 1.328700867207381e-16,
    1.3407829218289994e-16, 1.3528880151811755e-16, 1.3650172055943978e-16, 1.377171548282881e-16,
    1.389352096127064e-16, 1.4015599004375715e-16, 1.4137960117024852e-16, 1.4260614803196654e-16,
    1.4383573573157902e-16, 1.4506846950536877e-16, 1.4630445479294757e-16, 1.4754379730609516e-16,
    1.487866030968626e-16, 1.500329786250737e-16, 1.5128303082535394e-16, 1.5253686717381255e-16,
    1.537945957544997e-16, 1.5505632532575771e-16, 1.5632216538658375e-16, 1.5759222624311761e-16,
    1.5886661907536842e-16, 1.6014545600429167e-16, 1.6142885015932787e-16, 1.6271691574651305e-16,
    1.640097681172718e-16, 1.653075238380037e-16, 1.666103007605742e-16, 1.6791821809382289e-16,
    1.6923139647620223e-16, 1.7054995804966298e-16, 1.7187402653490317e-16, 1.7320372730810084e-16,
    1.745391874792534e-16, 1.7588053597224914e-16, 1.7722790360680065e-16, 1.7858142318237326e-16,
    1.7994122956424637e-16, 1.8130745977185016e-16, 1.8268025306952523e-16, 1.8405975105985878e-16,
    1.8544609777975695e-16, 1.8683943979941927e-16, 1.882399263243892e-16, 1.8964770930086167e-16,
    1.9106294352443765e-16, 1.9248578675252438e-16, 1.9391639982058994e-16, 1.9535494676249091e-16,
    1.9680159493510374e-16, 1.982565151475019e-16, 1.997198817949342e-16, 2.0119187299787347e-16,
    2.0267267074641983e-16, 2.0416246105035888e-16, 2.0566143409519179e-16, 2.071697844044737e-16,
    2.0868771100881597e-16, 2.1021541762192928e-16, 2.117531128241076e-16, 2.133010102535779e-16,
    2.1485932880616633e-16, 2.1642829284376047e-16, 2.180081324120784e-16, 2.1959908346828707e-16,
    2.212013881190496e-16, 2.2281529486961805e-16, 2.2444105888463086e-16, 2.2607894226131737e-16,
    2.277292143158621e-16, 2.2939215188373114e-16, 2.3106803963482133e-16, 2.3275717040435346e-16,
    2.344598455404958e-16, 2.361763752697774e-16, 2.3790707908142767e-16, 2.3965228613186235e-16,
    2.4141233567062933e-16, 2.431875774892256e-16, 2.44978372394307e-16, 2.4678509270692887e-16,
    2.4860812278958517e-16, 2.504478596029557e-16, 2.523047132944217e-16, 2.541791078205812e-16,
    2.560714816061771e-16, 2.579822882420531e-16, 2.599119972249747e-16, 2.618610947423924e-16,
    2.638300845054943e-16, 2.658194886341845e-16, 2.678298485979525e-16, 2.698617262169489e-16,
    2.7191570472798185e-16, 2.739923899205815e-16, 2.760924113487617e-16, 2.782164236246436e-16,
    2.8036510780069835e-16, 2.825391728480253e-16, 2.847393572388174e-16, 2.8696643064198177e-16,
    2.8922119574179956e-16, 2.915044901905293e-16, 2.9381718870700286e-16, 2.9616020533454657e-16,
    2.9853449587300453e-16, 3.009410605012618e-16, 3.0338094660850034e-16, 3.058552518544861e-16,
    3.08365127481531e-16, 3.1091178190342663e-16, 3.134964845996663e-16, 3.1612057034671057e-16,
    3.187854438219713e-16, 3.2149258462067974e-16, 3.2424355273094516e-16, 3.2703999451822404e-16,
    3.298836492772283e-16, 3.3277635641716714e-16, 3.357200633553244e-16, 3.387168342045505e-16,
    3.417688593525637e-16, 3.448784660453424e-16, 3.4804813010374423e-16, 3.5128048892229794e-16,
    3.545783559224792e-16, 3.5794473666042765e-16, 3.6138284682190606e-16, 3.6489613237645425e-16,
    3.6848829220956213e-16, 3.7216330360802073e-16, 3.7592545104162565e-16, 3.7977935876688744e-16,
    3.8373002787892137e-16, 3.8778287856078953e-16, 3.919437984311429e-16, 3.962191980786775e-16,
    4.0061607510565417e-16, 4.051420882956573e-16, 4.0980564389030625e-16, 4.1461599642909046e-16,
    4.195833672073399e-16, 4.247190841824385e-16, 4.3003574816674707e-16, 4.355474314693952e-16,
    4.41269916903607e-16, 4.472209874259932e-16, 4.534207798565834e-16, 4.598922204905932e-16,
    4.666615664711476e-16, 4.737590853262492e-16, 4.812199172829238e-16, 4.89085182739221e-16,
    4.97403423619194e-16, 5.06232507214416e-16, 5.156421828878083e-16, 5.257175802022275e-16,
    5.365640977112022e-16, 5.483144034258704e-16, 5.61138745467516e-16, 5.752606481503332e-16,
    5.909817641652103e-16, 6.087231416180908e-16, 6.290979034877557e-16, 6.530492053564041e-16,
    6.821393079028929e-16, 7.192444966089362e-16, 7.706095350032097e-16, 8.545517038584027e-16,
];

/// Exponential density at layer edges.
#[rustfmt::skip]
pub(crate) const FE_DOUBLE: [f64; 256] = [
    1.0, 0.9381436808621747, 0.9004699299257465, 0.8717043323812036,
    0.8477855006239896, 0.8269932966430503, 0.8084216515230084, 0.7915276369724956,
    0.7759568520401156, 0.7614633888498963, 0.7478686219851951, 0.7350380924314235,
    0.722867659593572, 0.711274760805076, 0.7001926550827882, 0.689566496117078,
    0.6793505722647654, 0.6695063167319247, 0.6600008410789997, 0.6508058334145711,
    0.6418967164272661, 0.6332519942143661, 0.624852738703666, 0.6166821809152077,
    0.608725382079622, 0.6009689663652322, 0.5934009016917334, 0.586010318477268,
    0.578787358602845, 0.5717230486648258, 0.5648091929124002, 0.5580382822625874,
    0.5514034165406413, 0.5448982376724396, 0.5385168720028619, 0.5322538802630433,
    0.5261042139836197, 0.5200631773682336, 0.5141263938147486, 0.5082897764106429,
    0.5025495018413477, 0.49690198724154955, 0.49134386959403253, 0.4858719873418849,
    0.4804833639304542, 0.4751751930373774, 0.46994482528396, 0.4647897562504262,
    0.4597076156421377, 0.4546961574746155, 0.449753251162755, 0.4448768734145485,
    0.4400651008423539, 0.4353161032156366, 0.43062813728845883, 0.42599954114303434,
    0.4214287289976166, 0.4169141864330029, 0.4124544659971612, 0.4080481831520324,
    0.4036940125305303, 0.3993906844752311, 0.39513698183329016, 0.3909317369847971,
    0.38677382908413765, 0.38266218149600983, 0.3785957594095808, 0.37457356761590216,
    0.370594648435146, 0.36665807978151416, 0.3627629733548178, 0.3589084729487498,
    0.35509375286678746, 0.35131801643748334, 0.347580494621637, 0.3438804447045024,
    0.34021714906678, 0.3365899140286776, 0.332998068761809, 0.3294409642641363,
    0.3259179723935562, 0.32242848495608917, 0.31897191284495724, 0.31554768522712895,
    0.31215524877417955, 0.3087940669345602, 0.30546361924459026, 0.3021634006756935,
    0.2988929210155818, 0.2956517042812612, 0.2924392881618926, 0.28925522348967775,
    0.2860990737370768, 0.28297041453878075, 0.2798688332369729, 0.27679392844851736,
    0.27374530965280297, 0.27072259679906, 0.2677254199320448, 0.2647534188350622,
    0.261806242689363, 0.25888354974901623, 0.2559850070304154, 0.25311029001562946,
    0.2502590823688623, 0.24743107566532763, 0.2446259691318921, 0.24184346939887721,
    0.23908329026244918, 0.23634515245705964, 0.23362878343743335, 0.2309339171696274,
    0.2282602939307167, 0.22560766011668407, 0.2229757680581202, 0.2203643758433595,
    0.21777324714870053, 0.21520215107537868, 0.21265086199297828, 0.21011915938898826,
    0.20760682772422204, 0.2051136562938377, 0.20263943909370902, 0.20018397469191127,
    0.19774706610509887, 0.19532852067956322, 0.19292814997677135, 0.1905457696631954,
    0.18818119940425432, 0.1858342627621971, 0.18350478709776746, 0.1811926034754963,
    0.1788975465724783, 0.17661945459049488, 0.1743581691713535, 0.17211353531532006,
    0.16988540130252766, 0.1676736186172502, 0.165478041874936, 0.16329852875190182,
    0.16113493991759203, 0.1589871389693142, 0.15685499236936523, 0.15473836938446808,
    0.15263714202744286, 0.1505511850010399, 0.1484803756438668, 0.14642459387834494,
    0.14438372216063478, 0.1423576454324722, 0.14034625107486245, 0.1383494288635802,
    0.13636707092642886, 0.13439907170221363, 0.13244532790138752, 0.13050573846833077,
    0.12858020454522817, 0.12666862943751067, 0.12477091858083096, 0.12288697950954514,
    0.12101672182667483, 0.11916005717532768, 0.11731689921155557, 0.11548716357863353,
    0.11367076788274431, 0.1118676316700563, 0.11007767640518538, 0.1083008254510338,
    0.10653700405000166, 0.10478613930657017, 0.10304816017125772, 0.10132299742595363,
    0.09961058367063713, 0.0979108533114922, 0.0962237425504328, 0.09454918937605586,
    0.09288713355604354, 0.09123751663104016, 0.08960028191003286, 0.08797537446727022,
    0.08636274114075691, 0.08476233053236812, 0.08317409300963238, 0.08159798070923742,
    0.0800339475423199, 0.07848194920160642, 0.0769419431704805, 0.07541388873405841,
    0.07389774699236475, 0.07239348087570874, 0.07090105516237183, 0.06942043649872875,
    0.0679515934219366, 0.06649449638533977, 0.06504911778675375, 0.06361543199980733,
    0.062193415408540995, 0.06078304644547963, 0.059384305633420266, 0.05799717563120066,
    0.05662164128374288, 0.05525768967669704, 0.05390531019604609, 0.05256449459307169,
    0.05123523705512628, 0.04991753428270637, 0.0486113855733795, 0.04731679291318155,
    0.04603376107617517, 0.04476229773294328, 0.04350241356888818, 0.042254122413316234,
    0.04101744138041482, 0.039792391023374125, 0.03857899550307486, 0.03737728277295936,
    0.03618728478193142, 0.03500903769739741, 0.03384258215087433, 0.032687963508959535,
    0.03154523217289361, 0.030414443910466604, 0.029295660224637393, 0.028188948763978636,
    0.0270943837809558, 0.026012046645134217, 0.024942026419731783, 0.02388442051155817,
    0.02283933540638524, 0.02180688750428358, 0.020787204072578117, 0.019780424338009743,
    0.01878670074469603, 0.01780620041091136, 0.016839106826039948, 0.015885621839973163,
    0.014945968011691148, 0.014020391403181938, 0.013109164931254991, 0.012212592426255381,
    0.011331013597834597, 0.010464810181029979, 0.00961441364250221, 0.008780314985808975,
    0.00796307743801704, 0.007163353183634984, 0.006381905937319179, 0.005619642207205483,
    0.004877655983542392, 0.004157295120833795, 0.003460264777836904, 0.002788798793574076,
    0.0021459677437189063, 0.0015362997803015724, 0.0009672692823271745, 0.00045413435384149677,
];
