//! Case-class filter table sent with every document search.
//!
//! The portal only returns lawsuits whose class is selected in the search
//! form, so the crawler always sends the full list of classes the portal offers.

/// Every case-class identifier offered by the document search form, in form order.
pub const CASE_CLASS_IDS: &[&str] = &[
    "0000100000", "0000000452", "0000000456", "0000000459", "0000000003", "0000000002",
    "0000000413", "0000000001", "0000100072", "0000100095", "0000000006", "0000000300",
    "0000000013", "0000000388", "0000000387", "0000000018", "0000000301", "0000000218",
    "0000000196", "0000000416", "0000000302", "0000000022", "0000100037", "0000000303",
    "0000000304", "0000000305", "0000000273", "0000000389", "0000000411", "0000000414",
    "0000000373", "0000000374", "0000000426", "0000000230", "0000000171", "0000000165",
    "0000000169", "0000000306", "0000000307", "0000000427", "0000000428", "0000000032",
    "0000000412", "0000000308", "0000000779", "0000008750", "0000100057", "0000000449",
    "0000000036", "0000000450", "0000100098", "0000100099", "0000004350", "0000000037",
    "0000000038", "0000000390", "0000000309", "0000000040", "0000000310", "0000000311",
    "0000000312", "0000000313", "0000100109", "0000000468", "0000000203", "0000000045",
    "0000000004", "0000100001", "0000000314", "0000000231", "0000100002", "0000000005",
    "0000000315", "0000000048", "0000000316", "0000000362", "0000000050", "0000100086",
    "0000100085", "0000000317", "0000100003", "0000000214", "0000000052", "0000100004",
    "0000100005", "0000100118", "0000000064", "0000100092", "0000000318", "0000000204",
    "0000000054", "0000000055", "0000100042", "0000000319", "0000100119", "0000000007",
    "0000100076", "0000100112", "0000000057", "0000014550", "0000100158", "0000000058",
    "0000000420", "0000100055", "0000005220", "0000014603", "0000000445", "0000000435",
    "0000000422", "0000100063", "0000100115", "0000000320", "0000000407", "0000000060",
    "0000000418", "0000006020", "0000014544", "0000014607", "0000100054", "0000000444",
    "0000000433", "0000000424", "0000000421", "0000100064", "0000100133", "0000000235",
    "0000000463", "0000100132", "0000000423", "0000014604", "0000000061", "0000000425",
    "0000014545", "0000000419", "0000000062", "0000100134", "0000012820", "0000008530",
    "0000008460", "0000008470", "0000008540", "0000008480", "0000008490", "0000008550",
    "0000008620", "0000008570", "0000008660", "0000006740", "0000008590", "0000006710",
    "0000006760", "0000008600", "0000006720", "0000006770", "0000008610", "0000006730",
    "0000006780", "0000014520", "0000000139", "0000008500", "0000002480", "0000014546",
    "0000014586", "0000014587", "0000014589", "0000014588", "0000014590", "0000014529",
    "0000100077", "0000100155", "0000000008", "0000000009", "0000000321", "0000000438",
    "0000100006", "0000000322", "0000000066", "0000000744", "0000000746", "0000014532",
    "0000100065", "0000000216", "0000100128", "0000002160", "0000000358", "0000000011",
    "0000000404", "0000000010", "0000100124", "0000100007", "0000000232", "0000000323",
    "0000000467", "0000100149", "0000000370", "0000000221", "0000000250", "0000000166",
    "0000100079", "0000100080", "0000000168", "0000000164", "0000000170", "0000000220",
    "0000014613", "0000100083", "0000100136", "0000000471", "0000014559", "0000014619",
    "0000100040", "0000100008", "0000000199", "0000100039", "0000000068", "0000000406",
    "0000000460", "0000000219", "0000000014", "0000000454", "0000000070", "0000000015",
    "0000000398", "0000000016", "0000000017", "0000000209", "0000000208", "0000000027",
    "0000014558", "0000100009", "0000100010", "0000000069", "0000000399", "0000100088",
    "0000100034", "0000000071", "0000000410", "0000000072", "0000000408", "0000000073",
    "0000000391", "0000000357", "0000000074", "0000000324", "0000000325", "0000100011",
    "0000000326", "0000000078", "0000000392", "0000000079", "0000100157", "0000014596",
    "0000100073", "0000000364", "0000000202", "0000000327", "0000008850", "0000000772",
    "0000000328", "0000100137", "0000000082", "0000000083", "0000000084", "0000000085",
    "0000000086", "0000000087", "0000000394", "0000100131", "0000004690", "0000004640",
    "0000000237", "0000000252", "0000000365", "0000000371", "0000000088", "0000000393",
    "0000000437", "0000000089", "0000003901", "0000000090", "0000000091", "0000000092",
    "0000000395", "0000004630", "0000000439", "0000100130", "0000014531", "0000002050",
    "0000014527", "0000000239", "0000000254", "0000100031", "0000000211", "0000000363",
    "0000100012", "0000100102", "0000100103", "0000100123", "0000100093", "0000000386",
    "0000000366", "0000000198", "0000000384", "0000014557", "0000000094", "0000000241",
    "0000100013", "0000100138", "0000000382", "0000100041", "0000000095", "0000000381",
    "0000100062", "0000000096", "0000000097", "0000000429", "0000000098", "0000000430",
    "0000000383", "0000000385", "0000000329", "0000000099", "0000100139", "0000100066",
    "0000100140", "0000100141", "0000100043", "0000000417", "0000100100", "0000100108",
    "0000100156", "0000000100", "0000000431", "0000000205", "0000000477", "0000000470",
    "0000000249", "0000000101", "0000000377", "0000009800", "0000000102", "0000100035",
    "0000100105", "0000100053", "0000100014", "0000000210", "0000014601", "0000000130",
    "0000012077", "0000100081", "0000003900", "0000002900", "0000000020", "0000001050",
    "0000001040", "0000001030", "0000000409", "0000000200", "0000000103", "0000000104",
    "0000000397", "0000008790", "0000007800", "0000100067", "0000100044", "0000000105",
    "0000000436", "0000000513", "0000014548", "0000014549", "0000014595", "0000014597",
    "0000000106", "0000000107", "0000000396", "0000008780", "0000008820", "0000008950",
    "0000008810", "0000008890", "0000008740", "0000100068", "0000014621", "0000014547",
    "0000100127", "0000100147", "0000100069", "0000014574", "0000014570", "0000014575",
    "0000000441", "0000100110", "0000014584", "0000014556", "0000100126", "0000100148",
    "0000100070", "0000000110", "0000000604", "0000000330", "0000000415", "0000100015",
    "0000100059", "0000000440", "0000100045", "0000000112", "0000000824", "0000000108",
    "0000100016", "0000100017", "0000100018", "0000100019", "0000000113", "0000100113",
    "0000000132", "0000000458", "0000100020", "0000000360", "0000000461", "0000000462",
    "0000000455", "0000000114", "0000000401", "0000014554", "0000000115", "0000000116",
    "0000000356", "0000014555", "0000000212", "0000000213", "0000000331", "0000000378",
    "0000000118", "0000000375", "0000000750", "0000000376", "0000000832", "0000008340",
    "0000000119", "0000000379", "0000100091", "0000000469", "0000000380", "0000000255",
    "0000000120", "0000000121", "0000000122", "0000000123", "0000000124", "0000000125",
    "0000000126", "0000000332", "0000000333", "0000000129", "0000000334", "0000000367",
    "0000000133", "0000000243", "0000000368", "0000000135", "0000000138", "0000000140",
    "0000000163", "0000100078", "0000100116", "0000100056", "0000100117", "0000000028",
    "0000000141", "0000000335", "0000000134", "0000000453", "0000000143", "0000000206",
    "0000000144", "0000000400", "0000000145", "0000000369", "0000000372", "0000000146",
    "0000000226", "0000000227", "0000000336", "0000000148", "0000000149", "0000001010",
    "0000100114", "0000014582", "0000000443", "0000001011", "0000000150", "0000100106",
    "0000000337", "0000000153", "0000000154", "0000000155", "0000000156", "0000100154",
    "0000000338", "0000000152", "0000100101", "0000000158", "0000009310", "0000014581",
    "0000000663", "0000014598", "0000000434", "0000014528", "0000014521", "0000014599",
    "0000000257", "0000100153", "0000100071", "0000100111", "0000000246", "0000014602",
    "0000000339", "0000009388", "0000000340", "0000009333", "0000000217", "0000100074",
    "0000000029", "0000100082", "0000100075", "0000100032", "0000000432", "0000000161",
    "0000100146", "0000000247", "0000000162", "0000000167", "0000000228", "0000100036",
    "0000010441", "0000100061", "0000100121", "0000000136", "0000001012", "0000100058",
    "0000000137", "0000000457", "0000000172", "0000100090", "0000000341", "0000100060",
    "0000000187", "0000000342", "0000014573", "0000014571", "0000014572", "0000100125",
    "0000100129", "0000014583", "0000014600", "0000000343", "0000000451", "0000100142",
    "0000000403", "0000100046", "0000100047", "0000000344", "0000000474", "0000000465",
    "0000000345", "0000000346", "0000000180", "0000000181", "0000000448", "0000100143",
    "0000000176", "0000000466", "0000000464", "0000000361", "0000100048", "0000100049",
    "0000014553", "0000100021", "0000100089", "0000000224", "0000100120", "0000100052",
    "0000000347", "0000000348", "0000000349", "0000000472", "0000000473", "0000000222",
    "0000100033", "0000100104", "0000000033", "0000000350", "0000000186", "0000000351",
    "0000000352", "0000009445", "0000009666", "0000100107", "0000000190", "0000000402",
    "0000100150", "0000000442", "0000000258", "0000000248", "0000100050", "0000000109",
    "0000008910", "0000008730", "0000100122", "0000000191", "0000100051", "0000000353",
    "0000000760", "0000100135", "0000100084", "0000000035", "0000100022", "0000100144",
    "0000100023", "0000100024", "0000000215", "0000000446", "0000100025", "0000100026",
    "0000000223", "0000100087", "0000100027", "0000000359", "0000000475", "0000000354",
    "0000000476", "0000000355", "0000000195", "0000000447", "0000100145", "0000100038",
    "0000014552", "0000014567", "0000014560", "0000014562", "0000100152", "0000100097",
    "0000014551", "0000014569", "0000014561", "0000001456", "0000100151", "0000100028",
    "0000100029", "0000100096", "0000100030", "0000000025", "0000000405",
];

/// Class pre-selected in the form's single-select field.
pub const DEFAULT_CASE_CLASS: &str = "0000100000";
