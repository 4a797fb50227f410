//! Lookup of the conventional media type for a file extension.
//!
//! ```
//! use media_type::{media_type_for_file_extension, MediaType};
//!
//! assert_eq!(media_type_for_file_extension("json"), Some(&MediaType::new("application", "json")));
//! assert_eq!(media_type_for_file_extension("unknownext"), None);
//! ```
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::media_type::MediaType;

type Row = (&'static str, &'static str, &'static str);

static FILE_EXTENSIONS: LazyLock<HashMap<&'static str, MediaType>> =
    LazyLock::new(|| build_table(ROWS));

/// returns the media type conventionally used for files with the given extension
///
/// The extension is given without the leading `.` and is compared case
/// sensitive, so `"JSON"` is not found.
pub fn media_type_for_file_extension(extension: &str) -> Option<&'static MediaType> {
    FILE_EXTENSIONS.get(extension)
}

/// like `media_type_for_file_extension` but with the extension of `path`
pub fn media_type_for_path<P>(path: P) -> Option<&'static MediaType>
    where P: AsRef<Path>
{
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(media_type_for_file_extension)
}

// if an extension appears multiple times the last row wins
fn build_table(rows: &[Row]) -> HashMap<&'static str, MediaType> {
    rows.iter()
        .map(|&(ext, type_, subtype)| (ext, MediaType::new(type_, subtype)))
        .collect()
}

static ROWS: &[Row] = extension_rows! {
    "application" => {
        "ez" => "andrew-inset",
        "anx" => "annodex",
        "atom" => "atom+xml",
        "atomcat" => "atomcat+xml",
        "atomsrv" => "atomserv+xml",
        "lin" => "bbolin",
        "cu" => "cu-seeme",
        "davmount" => "davmount+xml",
        "dcm" => "dicom",
        "tsp" => "dsptype",
        "es" => "ecmascript",
        "spl" => "futuresplash",
        "hta" => "hta",
        "jar" => "java-archive",
        "ser" => "java-serialized-object",
        "class" => "java-vm",
        "js" => "javascript",
        "json" => "json",
        "m3g" => "m3g",
        "hqx" => "mac-binhex40",
        "cpt" => "mac-compactpro",
        "nb" => "mathematica",
        "nbp" => "mathematica",
        "mbox" => "mbox",
        "mdb" => "msaccess",
        "doc" => "msword",
        "dot" => "msword",
        "mxf" => "mxf",
        "bin" => "octet-stream",
        "oda" => "oda",
        "ogx" => "ogg",
        "one" => "onenote",
        "onetoc2" => "onenote",
        "onetmp" => "onenote",
        "onepkg" => "onenote",
        "pdf" => "pdf",
        "pgp" => "pgp-encrypted",
        "key" => "pgp-keys",
        "sig" => "pgp-signature",
        "prf" => "pics-rules",
        "ps" => "postscript",
        "ai" => "postscript",
        "eps" => "postscript",
        "epsi" => "postscript",
        "epsf" => "postscript",
        "eps2" => "postscript",
        "eps3" => "postscript",
        "rar" => "rar",
        "rdf" => "rdf+xml",
        "rtf" => "rtf",
        "stl" => "sla",
        "smi" => "smil+xml",
        "smil" => "smil+xml",
        "xhtml" => "xhtml+xml",
        "xht" => "xhtml+xml",
        "xml" => "xml",
        "xsd" => "xml",
        "xsl" => "xslt+xml",
        "xslt" => "xslt+xml",
        "xspf" => "xspf+xml",
        "zip" => "zip",
        "apk" => "vnd.android.package-archive",
        "cdy" => "vnd.cinderella",
        "kml" => "vnd.google-earth.kml+xml",
        "kmz" => "vnd.google-earth.kmz",
        "xul" => "vnd.mozilla.xul+xml",
        "xls" => "vnd.ms-excel",
        "xlb" => "vnd.ms-excel",
        "xlt" => "vnd.ms-excel",
        "xlam" => "vnd.ms-excel.addin.macroEnabled.12",
        "xlsb" => "vnd.ms-excel.sheet.binary.macroEnabled.12",
        "xlsm" => "vnd.ms-excel.sheet.macroEnabled.12",
        "xltm" => "vnd.ms-excel.template.macroEnabled.12",
        "eot" => "vnd.ms-fontobject",
        "thmx" => "vnd.ms-officetheme",
        "cat" => "vnd.ms-pki.seccat",
        "ppt" => "vnd.ms-powerpoint",
        "pps" => "vnd.ms-powerpoint",
        "ppam" => "vnd.ms-powerpoint.addin.macroEnabled.12",
        "pptm" => "vnd.ms-powerpoint.presentation.macroEnabled.12",
        "sldm" => "vnd.ms-powerpoint.slide.macroEnabled.12",
        "ppsm" => "vnd.ms-powerpoint.slideshow.macroEnabled.12",
        "potm" => "vnd.ms-powerpoint.template.macroEnabled.12",
        "docm" => "vnd.ms-word.document.macroEnabled.12",
        "dotm" => "vnd.ms-word.template.macroEnabled.12",
        "odc" => "vnd.oasis.opendocument.chart",
        "odb" => "vnd.oasis.opendocument.database",
        "odf" => "vnd.oasis.opendocument.formula",
        "odg" => "vnd.oasis.opendocument.graphics",
        "otg" => "vnd.oasis.opendocument.graphics-template",
        "odi" => "vnd.oasis.opendocument.image",
        "odp" => "vnd.oasis.opendocument.presentation",
        "otp" => "vnd.oasis.opendocument.presentation-template",
        "ods" => "vnd.oasis.opendocument.spreadsheet",
        "ots" => "vnd.oasis.opendocument.spreadsheet-template",
        "odt" => "vnd.oasis.opendocument.text",
        "odm" => "vnd.oasis.opendocument.text-master",
        "ott" => "vnd.oasis.opendocument.text-template",
        "oth" => "vnd.oasis.opendocument.text-web",
        "pptx" => "vnd.openxmlformats-officedocument.presentationml.presentation",
        "sldx" => "vnd.openxmlformats-officedocument.presentationml.slide",
        "ppsx" => "vnd.openxmlformats-officedocument.presentationml.slideshow",
        "potx" => "vnd.openxmlformats-officedocument.presentationml.template",
        "xlsx" => "vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xltx" => "vnd.openxmlformats-officedocument.spreadsheetml.template",
        "docx" => "vnd.openxmlformats-officedocument.wordprocessingml.document",
        "dotx" => "vnd.openxmlformats-officedocument.wordprocessingml.template",
        "cod" => "vnd.rim.cod",
        "mmf" => "vnd.smaf",
        "sdc" => "vnd.stardivision.calc",
        "sds" => "vnd.stardivision.chart",
        "sda" => "vnd.stardivision.draw",
        "sdd" => "vnd.stardivision.impress",
        "sdf" => "vnd.stardivision.math",
        "sdw" => "vnd.stardivision.writer",
        "sgl" => "vnd.stardivision.writer-global",
        "sxc" => "vnd.sun.xml.calc",
        "stc" => "vnd.sun.xml.calc.template",
        "sxd" => "vnd.sun.xml.draw",
        "std" => "vnd.sun.xml.draw.template",
        "sxi" => "vnd.sun.xml.impress",
        "sti" => "vnd.sun.xml.impress.template",
        "sxm" => "vnd.sun.xml.math",
        "sxw" => "vnd.sun.xml.writer",
        "sxg" => "vnd.sun.xml.writer.global",
        "stw" => "vnd.sun.xml.writer.template",
        "sis" => "vnd.symbian.install",
        "cap" => "vnd.tcpdump.pcap",
        "pcap" => "vnd.tcpdump.pcap",
        "vsd" => "vnd.visio",
        "wbxml" => "vnd.wap.wbxml",
        "wmlc" => "vnd.wap.wmlc",
        "wmlsc" => "vnd.wap.wmlscriptc",
        "wpd" => "vnd.wordperfect",
        "wp5" => "vnd.wordperfect5.1",
        "wk" => "x-123",
        "7z" => "x-7z-compressed",
        "abw" => "x-abiword",
        "dmg" => "x-apple-diskimage",
        "bcpio" => "x-bcpio",
        "torrent" => "x-bittorrent",
        "cab" => "x-cab",
        "cbr" => "x-cbr",
        "cbz" => "x-cbz",
        "cdf" => "x-cdf",
        "cda" => "x-cdf",
        "vcd" => "x-cdlink",
        "pgn" => "x-chess-pgn",
        "mph" => "x-comsol",
        "cpio" => "x-cpio",
        "csh" => "x-csh",
        "deb" => "x-debian-package",
        "udeb" => "x-debian-package",
        "dcr" => "x-director",
        "dir" => "x-director",
        "dxr" => "x-director",
        "dms" => "x-dms",
        "wad" => "x-doom",
        "dvi" => "x-dvi",
        "pfa" => "x-font",
        "pfb" => "x-font",
        "gsf" => "x-font",
        "pcf" => "x-font",
        "pcf.Z" => "x-font",
        "woff" => "x-font-woff",
        "mm" => "x-freemind",
        "gan" => "x-ganttproject",
        "gnumeric" => "x-gnumeric",
        "sgf" => "x-go-sgf",
        "gcf" => "x-graphing-calculator",
        "gtar" => "x-gtar",
        "tgz" => "x-gtar-compressed",
        "taz" => "x-gtar-compressed",
        "hdf" => "x-hdf",
        "hwp" => "x-hwp",
        "ica" => "x-ica",
        "info" => "x-info",
        "ins" => "x-internet-signup",
        "isp" => "x-internet-signup",
        "iii" => "x-iphone",
        "iso" => "x-iso9660-image",
        "jam" => "x-jam",
        "jnlp" => "x-java-jnlp-file",
        "jmz" => "x-jmol",
        "chrt" => "x-kchart",
        "kil" => "x-killustrator",
        "skp" => "x-koan",
        "skd" => "x-koan",
        "skt" => "x-koan",
        "skm" => "x-koan",
        "kpr" => "x-kpresenter",
        "kpt" => "x-kpresenter",
        "ksp" => "x-kspread",
        "kwd" => "x-kword",
        "kwt" => "x-kword",
        "latex" => "x-latex",
        "lha" => "x-lha",
        "lyx" => "x-lyx",
        "lzh" => "x-lzh",
        "lzx" => "x-lzx",
        "frm" => "x-maker",
        "maker" => "x-maker",
        "frame" => "x-maker",
        "fm" => "x-maker",
        "fb" => "x-maker",
        "book" => "x-maker",
        "fbdoc" => "x-maker",
        "md5" => "x-md5",
        "mif" => "x-mif",
        "m3u8" => "x-mpegURL",
        "wmd" => "x-ms-wmd",
        "wmz" => "x-ms-wmz",
        "com" => "x-msdos-program",
        "exe" => "x-msdos-program",
        "bat" => "x-msdos-program",
        "dll" => "x-msdos-program",
        "msi" => "x-msi",
        "nc" => "x-netcdf",
        "pac" => "x-ns-proxy-autoconfig",
        "dat" => "x-ns-proxy-autoconfig",
        "nwc" => "x-nwc",
        "o" => "x-object",
        "oza" => "x-oz-application",
        "p7r" => "x-pkcs7-certreqresp",
        "crl" => "x-pkcs7-crl",
        "pyc" => "x-python-code",
        "pyo" => "x-python-code",
        "qgs" => "x-qgis",
        "shp" => "x-qgis",
        "shx" => "x-qgis",
        "qtl" => "x-quicktimeplayer",
        "rdp" => "x-rdp",
        "rpm" => "x-redhat-package-manager",
        "rss" => "x-rss+xml",
        "rb" => "x-ruby",
        "sci" => "x-scilab",
        "sce" => "x-scilab",
        "xcos" => "x-scilab-xcos",
        "sh" => "x-sh",
        "sha1" => "x-sha1",
        "shar" => "x-shar",
        "swf" => "x-shockwave-flash",
        "swfl" => "x-shockwave-flash",
        "scr" => "x-silverlight",
        "sql" => "x-sql",
        "sit" => "x-stuffit",
        "sitx" => "x-stuffit",
        "sv4cpio" => "x-sv4cpio",
        "sv4crc" => "x-sv4crc",
        "tar" => "x-tar",
        "tcl" => "x-tcl",
        "gf" => "x-tex-gf",
        "pk" => "x-tex-pk",
        "texinfo" => "x-texinfo",
        "texi" => "x-texinfo",
        "~" => "x-trash",
        "%" => "x-trash",
        "bak" => "x-trash",
        "old" => "x-trash",
        "sik" => "x-trash",
        "t" => "x-troff",
        "tr" => "x-troff",
        "roff" => "x-troff",
        "man" => "x-troff-man",
        "me" => "x-troff-me",
        "ms" => "x-troff-ms",
        "ustar" => "x-ustar",
        "src" => "x-wais-source",
        "wz" => "x-wingz",
        "crt" => "x-x509-ca-cert",
        "xcf" => "x-xcf",
        "fig" => "x-xfig",
        "xpi" => "x-xpinstall",
    }
    "audio" => {
        "amr" => "amr",
        "awb" => "amr-wb",
        "axa" => "annodex",
        "au" => "basic",
        "snd" => "basic",
        "csd" => "csound",
        "orc" => "csound",
        "sco" => "csound",
        "flac" => "flac",
        "mid" => "midi",
        "midi" => "midi",
        "kar" => "midi",
        "mpga" => "mpeg",
        "mpega" => "mpeg",
        "mp2" => "mpeg",
        "mp3" => "mpeg",
        "m4a" => "mpeg",
        "m3u" => "mpegurl",
        "oga" => "ogg",
        "ogg" => "ogg",
        "opus" => "ogg",
        "spx" => "ogg",
        "sid" => "prs.sid",
        "aif" => "x-aiff",
        "aiff" => "x-aiff",
        "aifc" => "x-aiff",
        "gsm" => "x-gsm",
        "wma" => "x-ms-wma",
        "wax" => "x-ms-wax",
        "ra" => "x-pn-realaudio",
        "rm" => "x-pn-realaudio",
        "ram" => "x-pn-realaudio",
        "pls" => "x-scpls",
        "sd2" => "x-sd2",
        "wav" => "x-wav",
    }
    "chemical" => {
        "alc" => "x-alchemy",
        "cac" => "x-cache",
        "cache" => "x-cache",
        "csf" => "x-cache-csf",
        "cbin" => "x-cactvs-binary",
        "cascii" => "x-cactvs-binary",
        "ctab" => "x-cactvs-binary",
        "cdx" => "x-cdx",
        "cer" => "x-cerius",
        "c3d" => "x-chem3d",
        "chm" => "x-chemdraw",
        "cif" => "x-cif",
        "cmdf" => "x-cmdf",
        "cml" => "x-cml",
        "cpa" => "x-compass",
        "bsd" => "x-crossfire",
        "csml" => "x-csml",
        "csm" => "x-csml",
        "ctx" => "x-ctx",
        "cxf" => "x-cxf",
        "cef" => "x-cxf",
        "emb" => "x-embl-dl-nucleotide",
        "embl" => "x-embl-dl-nucleotide",
        "spc" => "x-galactic-spc",
        "inp" => "x-gamess-input",
        "gam" => "x-gamess-input",
        "gamin" => "x-gamess-input",
        "fch" => "x-gaussian-checkpoint",
        "fchk" => "x-gaussian-checkpoint",
        "cub" => "x-gaussian-cube",
        "gau" => "x-gaussian-input",
        "gjc" => "x-gaussian-input",
        "gjf" => "x-gaussian-input",
        "gal" => "x-gaussian-log",
        "gcg" => "x-gcg8-sequence",
        "gen" => "x-genbank",
        "hin" => "x-hin",
        "istr" => "x-isostar",
        "ist" => "x-isostar",
        "jdx" => "x-jcamp-dx",
        "dx" => "x-jcamp-dx",
        "kin" => "x-kinemage",
        "mcm" => "x-macmolecule",
        "mmd" => "x-macromodel-input",
        "mmod" => "x-macromodel-input",
        "mol" => "x-mdl-molfile",
        "rd" => "x-mdl-rdfile",
        "rxn" => "x-mdl-rxnfile",
        "sd" => "x-mdl-sdfile",
        "tgf" => "x-mdl-tgf",
        "mcif" => "x-mmcif",
        "mol2" => "x-mol2",
        "b" => "x-molconn-Z",
        "gpt" => "x-mopac-graph",
        "mop" => "x-mopac-input",
        "mopcrt" => "x-mopac-input",
        "mpc" => "x-mopac-input",
        "zmt" => "x-mopac-input",
        "moo" => "x-mopac-out",
        "mvb" => "x-mopac-vib",
        "asn" => "x-ncbi-asn1",
        "prt" => "x-ncbi-asn1-ascii",
        "ent" => "x-ncbi-asn1-ascii",
        "val" => "x-ncbi-asn1-binary",
        "aso" => "x-ncbi-asn1-binary",
        "pdb" => "x-pdb",
        "ros" => "x-rosdal",
        "sw" => "x-swissprot",
        "vms" => "x-vamas-iso14976",
        "vmd" => "x-vmd",
        "xtel" => "x-xtel",
        "xyz" => "x-xyz",
    }
    "image" => {
        "gif" => "gif",
        "ief" => "ief",
        "jp2" => "jp2",
        "jpg2" => "jp2",
        "jpeg" => "jpeg",
        "jpg" => "jpeg",
        "jpe" => "jpeg",
        "jpm" => "jpm",
        "jpx" => "jpx",
        "jpf" => "jpx",
        "pcx" => "pcx",
        "png" => "png",
        "svg" => "svg+xml",
        "svgz" => "svg+xml",
        "tiff" => "tiff",
        "tif" => "tiff",
        "djvu" => "vnd.djvu",
        "djv" => "vnd.djvu",
        "ico" => "vnd.microsoft.icon",
        "wbmp" => "vnd.wap.wbmp",
        "cr2" => "x-canon-cr2",
        "crw" => "x-canon-crw",
        "ras" => "x-cmu-raster",
        "cdr" => "x-coreldraw",
        "pat" => "x-coreldrawpattern",
        "cdt" => "x-coreldrawtemplate",
        "erf" => "x-epson-erf",
        "art" => "x-jg",
        "jng" => "x-jng",
        "bmp" => "x-ms-bmp",
        "nef" => "x-nikon-nef",
        "orf" => "x-olympus-orf",
        "psd" => "x-photoshop",
        "pnm" => "x-portable-anymap",
        "pbm" => "x-portable-bitmap",
        "pgm" => "x-portable-graymap",
        "ppm" => "x-portable-pixmap",
        "rgb" => "x-rgb",
        "xbm" => "x-xbitmap",
        "xpm" => "x-xpixmap",
        "xwd" => "x-xwindowdump",
    }
    "message" => {
        "eml" => "rfc822",
    }
    "model" => {
        "igs" => "iges",
        "iges" => "iges",
        "msh" => "mesh",
        "mesh" => "mesh",
        "silo" => "mesh",
        "wrl" => "vrml",
        "vrml" => "vrml",
        "x3dv" => "x3d+vrml",
        "x3d" => "x3d+xml",
        "x3db" => "x3d+binary",
    }
    "text" => {
        "appcache" => "cache-manifest",
        "ics" => "calendar",
        "icz" => "calendar",
        "css" => "css",
        "csv" => "csv",
        "323" => "h323",
        "html" => "html",
        "htm" => "html",
        "shtml" => "html",
        "uls" => "iuls",
        "mml" => "mathml",
        "asc" => "plain",
        "txt" => "plain",
        "text" => "plain",
        "pot" => "plain",
        "brf" => "plain",
        "srt" => "plain",
        "rtx" => "richtext",
        "sct" => "scriptlet",
        "wsc" => "scriptlet",
        "tm" => "texmacs",
        "tsv" => "tab-separated-values",
        "ttl" => "turtle",
        "jad" => "vnd.sun.j2me.app-descriptor",
        "wml" => "vnd.wap.wml",
        "wmls" => "vnd.wap.wmlscript",
        "bib" => "x-bibtex",
        "boo" => "x-boo",
        "h++" => "x-c++hdr",
        "hpp" => "x-c++hdr",
        "hxx" => "x-c++hdr",
        "hh" => "x-c++hdr",
        "c++" => "x-c++src",
        "cpp" => "x-c++src",
        "cxx" => "x-c++src",
        "cc" => "x-c++src",
        "h" => "x-chdr",
        "htc" => "x-component",
        "c" => "x-csrc",
        "d" => "x-dsrc",
        "diff" => "x-diff",
        "patch" => "x-diff",
        "hs" => "x-haskell",
        "java" => "x-java",
        "ly" => "x-lilypond",
        "lhs" => "x-literate-haskell",
        "moc" => "x-moc",
        "p" => "x-pascal",
        "pas" => "x-pascal",
        "gcd" => "x-pcs-gcd",
        "pl" => "x-perl",
        "pm" => "x-perl",
        "py" => "x-python",
        "scala" => "x-scala",
        "etx" => "x-setext",
        "sfv" => "x-sfv",
        "tk" => "x-tcl",
        "tex" => "x-tex",
        "ltx" => "x-tex",
        "sty" => "x-tex",
        "cls" => "x-tex",
        "vcs" => "x-vcalendar",
        "vcf" => "x-vcard",
    }
    "video" => {
        "3gp" => "3gpp",
        "axv" => "annodex",
        "dl" => "dl",
        "dif" => "dv",
        "dv" => "dv",
        "fli" => "fli",
        "gl" => "gl",
        "mpeg" => "mpeg",
        "mpg" => "mpeg",
        "mpe" => "mpeg",
        "ts" => "MP2T",
        "mp4" => "mp4",
        "qt" => "quicktime",
        "mov" => "quicktime",
        "ogv" => "ogg",
        "webm" => "webm",
        "mxu" => "vnd.mpegurl",
        "flv" => "x-flv",
        "lsf" => "x-la-asf",
        "lsx" => "x-la-asf",
        "mng" => "x-mng",
        "asf" => "x-ms-asf",
        "asx" => "x-ms-asf",
        "wm" => "x-ms-wm",
        "wmv" => "x-ms-wmv",
        "wmx" => "x-ms-wmx",
        "wvx" => "x-ms-wvx",
        "avi" => "x-msvideo",
        "movie" => "x-sgi-movie",
        "mpv" => "x-matroska",
        "mkv" => "x-matroska",
    }
    "x-conference" => {
        "ice" => "x-cooltalk",
    }
    "x-epoc" => {
        "sisx" => "x-sisx-app",
    }
    "x-world" => {
        "vrm" => "x-vrml",
    }
};


#[cfg(test)]
mod test {
    use std::path::Path;

    use rstest::rstest;

    use crate::media_type::MediaType;
    use super::{build_table, media_type_for_file_extension, media_type_for_path, ROWS};

    #[rstest]
    #[case("json", "application", "json")]
    #[case("html", "text", "html")]
    #[case("png", "image", "png")]
    #[case("docx", "application", "vnd.openxmlformats-officedocument.wordprocessingml.document")]
    #[case("pcf.Z", "application", "x-font")]
    #[case("~", "application", "x-trash")]
    #[case("c++", "text", "x-c++src")]
    #[case("ice", "x-conference", "x-cooltalk")]
    fn known(#[case] ext: &str, #[case] type_: &str, #[case] subtype: &str) {
        let mt = media_type_for_file_extension(ext).expect("known extension");
        assert_eq!(mt.type_(), type_);
        assert_eq!(mt.subtype(), subtype);
        assert_eq!(mt.params().len(), 0);
    }

    #[rstest]
    #[case("unknownext")]
    #[case("")]
    #[case("JSON")]
    #[case(".json")]
    fn unknown(#[case] ext: &str) {
        assert_eq!(media_type_for_file_extension(ext), None);
    }

    #[test]
    fn subtypes_are_stored_verbatim() {
        let mt = media_type_for_file_extension("ts").unwrap();
        assert_eq!(mt.subtype(), "MP2T");
        let mt = media_type_for_file_extension("m3u8").unwrap();
        assert_eq!(mt.subtype(), "x-mpegURL");
    }

    #[test]
    fn many_extensions_share_a_media_type() {
        let jpeg = MediaType::new("image", "jpeg");
        for ext in &["jpeg", "jpg", "jpe"] {
            assert_eq!(media_type_for_file_extension(ext), Some(&jpeg));
        }
    }

    #[test]
    fn every_row_is_reachable() {
        let table = build_table(ROWS);
        assert_eq!(table.len(), ROWS.len());
    }

    #[test]
    fn last_duplicate_row_wins() {
        let table = build_table(&[
            ("spl", "application", "futuresplash"),
            ("txt", "text", "plain"),
            ("spl", "application", "x-futuresplash"),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table["spl"], MediaType::new("application", "x-futuresplash"));
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(
            media_type_for_path(Path::new("/srv/www/index.html")),
            Some(&MediaType::new("text", "html"))
        );
        assert_eq!(media_type_for_path("archive.tar"), Some(&MediaType::new("application", "x-tar")));
        assert_eq!(media_type_for_path("README"), None);
        assert_eq!(media_type_for_path("photo.JPG"), None);
    }
}
