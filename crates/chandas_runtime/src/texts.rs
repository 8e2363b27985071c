//! Bundled verse.

/// The Karaṇīyametta Sutta (Sn 1.8), one verse line per text line.
pub const KARANIYAMETTA_SUTTA: &str = "\
Karaṇīyamatthakusalena, yantasantaṃ padaṃ abhisamecca
Sakko ujū ca sūjū ca, suvaco cassa mudu anatimānī
Santussako ca subharo ca, appakicco ca sallahukavutti
Santindriyo ca nipako ca, appagabbho kulesvananugiddho
Na ca khuddamācare kiñci, yena viññū pare upavadeyyuṃ
Sukhinova khemino hontu, sabbasattā bhavantu sukhitattā
Ye keci pāṇabhūtatthi, tasā vā thāvarā vanavasesā
Dīghā vā yeva mahantā, majjhimā rassakā aṇukathūlā
Diṭṭhā vā yeva adiṭṭhā, ye va dūre vasanti avidūre
Bhūtā va sambhavesī va, sabbasattā bhavantu sukhitattā
Na paro paraṃ nikubbetha, nātimaññetha katthaci na kañci
Byārosanā paṭighasaññā, nāññamaññassa dukkhamiccheyya
Mātā yathā niyaṃ putta, māyusā ekaputtamanurakkhe
Evampi sabbabhūtesu, mānasaṃ bhāvaye aparimāṇaṃ
Mettañca sabbalokasmi, mānasaṃ bhāvaye aparimāṇaṃ
Uddhaṃ adho ca tiriyañca, asambādhaṃ averamasapattaṃ
Tiṭṭhaṃ caraṃ nisinno va, sayāno yāvatāssa vitamiddho
Etaṃ satiṃ adhiṭṭheyya, brahmametaṃ vihāramidhamāhu
Diṭṭhiñca anupaggamma, sīlavā dassanena sampanno
Kāmesu vinaya gedhaṃ, na hi jātuggabbhaseyya puna reti
";

/// Name shown for the bundled text.
pub const KARANIYAMETTA_TITLE: &str = "Karaṇīyametta Sutta";
