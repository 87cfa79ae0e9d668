//! Full-precision literals for the built-in constants.
//!
//! Every string here is trusted build-time data. They are parsed exactly
//! once by the constant registry in `tierdec-cache`.

/// ln(10).
pub const LN10: &str = concat!(
    "2.302585092994045684017991454684364207601101488628772976033327900967572609677352",
    "48023599720508959829834196778404228624863340952546508280675666628736909878168948",
    "29072083255546808437998948262331985283935053089653777326288461633662222876982198",
    "86746543667474404243274365155048934314939391479619404400222105101714174800368808",
    "40126470806855677432162283552201148046637156591213734507478569476834636167921018",
    "06445070648000277502684916746550586856935673420670581136429224554405758925724208",
    "24131469568901675894025677631135691929203337658714166023010570308963457207544037",
    "08474699401682692828084811842893148485249486448719278096762712757753970276686059",
    "52496716674183485704422507197965004714951050492214776567636938662976979522110718",
    "26454973477266242570942932258279850258550978526538320760672631716430950599508780",
    "75237103331011978575473315414218084275438635917781170543098274823850456480190956",
    "10299291824318237525357709750539565187697510374970888692180205189339507238539205",
    "14463419726528728696511086257149219884997874887377134568620916705849807828059751",
    "19385444500997813114691593466624107184669231010759843831919129223079250374729865",
    "09290098803919417026544168163357275557031515961135648465461908970428197633658369",
    "83716328982174407366009162177850541779276367731145041782137660111010731042397832",
    "52189489881759792179866639431952393685591644711824675324563091252877833096360426",
    "29821530408745609277607266413547875766162629265682987049579549139549180492090694",
    "38580790032763017941503117866862092408537949861264933479354871737451675809537088",
    "28106745244010589244497647968607512027572418187498939597164310551884819528833074",
    "66993178146349300003212003277656541304726218839705967944579434683432183953044148",
    "44803701305753674262153675579814770458031413637793236291560128185336498466942261",
    "46520645994207291711937060244492935803700771898109736253322454836698850552828596",
    "61928050984471751985036666808749704969822732202448233430971691111368135884186965",
    "49323714996941979687803008850408979618598756579894836445212043698216415292987811",
    "74297333258860791591251096718751092924847502393057266544627620092306879151813580",
    "34777012955936462984123664970233551745861955647724618577173693684046765770478743",
    "19780573853271810933883496338813069945569399346101090745616033312247949360455361",
    "84912333306370475172487127637914092439833181016473782337969226563768207170693584",
    "63945316169494117018419381194054164494661112747128197058177832938417422314099300",
    "22911502362192186723337268385688273533371925103412930705632544426611429765388301",
    "82238409102619858288843358745596045300454837078905257847316628370195339223104752",
    "75649981192287427897137157132283196410034221242100821806795252766898581809561192",
    "08391760721080919923461516952599099473782780648128058792731993893453415320185969",
    "71102140754228279629823706894176474064222575721245539252617937365243444056059533",
    "65915391603125244801493132345724538795243890368392364505078817313597112381453237",
    "01508413491122324390927681724749607955799151363982881058285740538000653371655553",
    "0141963322419180876210182049194926514838926922937079",);

/// 1 / ln(10).
pub const INV_LN10: &str = concat!(
    "0.434294481903251827651128918916605082294397005803666566114453783165864649208870",
    "77472922494933843174831870610674476630373364167928715896390656922106466281226585",
    "21270865686703295933708696588266883311636077384905142844348666768646586085135561",
    "48212348765343543435731725383562228139560304864665236609553937735617632343191671",
    "09914115978949629935124579349263576554690776710824191504799109896749001032775376",
    "53570270087328550951731440674697951899513594088040423931518868108402544654089797",
    "02986328682876262414401345704354613292060071260510402836712595484628770786199899",
    "23267484399023481715359345510794754925524825778206792201409314681644673810305604",
    "75635720408883383209488996522717494541331791417640247407505788767860971099257547",
    "73004604865604951561005798574134027267520143924791797085904793128521249334119732",
    "98772264638853502260838816263164638835536855017684602952863993916335106475557040",
    "50513182342988874882120643595023818902643317711537382203362634416478397146001858",
    "39609300631733398613403513574178714497145307649296833139239981060850573481616980",
    "92800161995235231172376765619892281270138158042487159783449272159475620571799934",
    "83814031940166771520104787197582531617951490375597514246570736646439756863149325",
    "16249872799485263744879116595921970172066270455928465703646263567573357573936967",
    "39945709096025263509571934688399512368113564280109587783137594427130499806437987",
    "50414472095974872674060160650105375287000491167867133309154761441005054775930890",
    "76788559653343219076312835357030485402097994161401080791060749887175249584146130",
    "38675320860013244863925455730728423861759706779893548445703183593365230160279716",
    "26535726514428519866063768635338181954876389161343652374759465663921380736144503",
    "68379787682436902880449364049675187172061413073180441718021644099320065106969695",
    "12470726662245700042293414079233616853024188602724118678062725703375525628707676",
    "96632173672454758133339263840130320038598899947332285703494195837691472090608812",
    "44782507873671157303393156562515790709324537045074432662334980714303805958177695",
    "79440700422025454305319108889827540622636006018791522674777882320960252287667624",
    "16332296812464502577295040226623627536311798532153780883272326920785980990757434",
    "43736724871035585330654658165353515794399007032643622252001033698041984301552452",
    "41731905202472122411109273244253029302008710373375048674986891172256720672682752",
    "46578790446735268575794059983346595878592624978725380185506389602375304294539963",
    "73736743468076751524998629767673240490336317548819532368008766864866606928208234",
    "25363113049399727028588728490862584586870455692445485386072024973966311263721224",
    "97538854967981580284810494724140453341192674240839673061167234256843129624666246",
    "25954276067718285896330658651395093204902303280635753624280431548065836885225783",
    "29015307874831419859290741214153447721653982148476192884065713454387986078951994",
    "35011532826457742311266817183284968697890904324421005272233475053141625981646457",
    "04453890114831376070844548345795572830386647363846853758717221068599393300837853",
    "4367552699899185150879055911525282664",);

/// 48/17, first seed of the reciprocal Newton iteration.
pub const QUO_C1: &str = concat!(
    "2.823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "58823529411764705882352941176470588235294117647058823529411764705882352941176470",
    "6",);

/// 32/17, second seed of the reciprocal Newton iteration.
pub const QUO_C2: &str = concat!(
    "1.882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "05882352941176470588235294117647058823529411764705882352941176470588235294117647",
    "1",);

// Quadratic approximation of cbrt(x) on 0.125 <= x <= 1, used as the
// starting point of the cube-root iteration. Coefficients from Apple
// Technical Report KT-32.
pub const CBRT_C1: &str = "-0.46946116";
pub const CBRT_C2: &str = "1.072302";
pub const CBRT_C3: &str = "0.3812513";
