//! Built-in Turkish pools (primary locale).

use super::{owned, AutopsyText, CategoryPack, LanguagePack, ServerLogTemplate, SurveillanceTemplate};
use crate::model::LogStatus;

const CITIES: &[&str] = &[
    "İstanbul", "Ankara", "İzmir", "Londra", "New York", "Tokyo", "Berlin", "Paris", "Viyana",
    "Prag",
];

const GIVEN_MALE: &[&str] = &[
    "Demir", "Kaya", "Pars", "Atlas", "Kuzey", "Baran", "Timur", "Sarp", "Victor", "Hans",
    "Kenji", "Cem", "Ozan", "Talat", "Mahir",
];

const GIVEN_FEMALE: &[&str] = &[
    "Eva", "Mia", "Lara", "Siren", "Arya", "Gece", "Vera", "Elena", "Yuki", "Isabella", "Leyla",
    "Selin", "Defne", "Hande",
];

const FAMILY: &[&str] = &[
    "Vance", "Korhan", "Soykan", "Blackwood", "Frost", "Yaman", "Erk", "Moretti", "Kovacs",
    "Dubois", "Yıldırım", "Demirkan", "Sancak",
];

const JOBS: &[&str] = &[
    "Kıdemli Yazılım Mühendisi",
    "Nörocerrah",
    "Ünlü Bir Mimar",
    "Emekli İstihbarat Subayı",
    "Sanat Tarihçisi",
    "Borsa Spekülatörü",
    "Araştırmacı Gazeteci",
    "Yeraltı Dünyası Figürü",
    "Kripto Para Milyoneri",
    "Biyokimya Profesörü",
    "Eski Boksör",
    "Kimya Mühendisi",
];

const PERSONALITIES: &[&str] = &[
    "Aşırı titiz, kontrolcü ve detaylara takıntılı",
    "Paranoyak, sürekli izlendiğini düşünüyor",
    "Dışa dönük, karizmatik ama manipülatif",
    "Soğukkanlı, hesapçı ve duygusuz",
    "Duygusal açıdan dengesiz ve öfke nöbetlerine yatkın",
    "Hırslı, acımasız ve başarı odaklı",
];

const RELATIONS: &[&str] = &[
    "Eski İş Ortağı",
    "Kardeşi",
    "Rakip Firmadan Yönetici",
    "Özel Asistanı",
    "Çocukluk Arkadaşı",
    "Avukatı",
    "Eski Eşi",
    "Alacaklısı",
];

const MOTIVES: &[&str] = &[
    "{victim} ile geçmişte ortak bir şirket kurmuşlardı, ancak maktul sahte evraklarla onu dolandırarak tüm hisselerine el koydu ve onu iflasa sürükledi.",
    "Maktulün kasasında, şüphelinin tüm kariyerini ve itibarını bitirebilecek gizli video kayıtları ve şantaj dosyaları bulunuyordu.",
    "Yasak bir aşk ilişkisi yaşıyorlardı. {victim} bu ilişkiyi eşine ve basına açıklamakla tehdit edince işler kontrolden çıktı.",
    "Miras paylaşımı konusunda {victim} ile yıllardır süren kanlı bıçaklı bir davaları vardı. Kaybeden her şeyini yitirecekti.",
    "Maktul, şüphelinin yasadışı kumar borçlarını ve tefecilerle olan bağlantılarını polise ihbar etmek üzereydi.",
    "Akademik bir çalışma üzerindeki hırsızlık iddiası aralarındaki dostluğu nefrete dönüştürmüştü. Şüpheli, fikrinin çalındığını iddia ediyordu.",
];

const CORROBORATED_ALIBIS: &[&str] = &[
    "Olay saatinde şehir dışındaydım, uçak biletim var.",
    "Evde eşimle film izliyorduk, komşular da gördü.",
    "Ofiste fazla mesai yapıyordum, güvenlik kamerası kayıtları var.",
    "Hastanedeydim, acil serviste nöbetçiydim.",
    "Arkadaşlarımla barda maç izliyorduk, garson şahidim.",
    "Evde uyuyordum, ama telefonumun GPS geçmişi evde olduğumu gösteriyor.",
];

const SUSPICIOUS_ALIBIS: &[&str] = &[
    "Bütün gece evde tek başıma kitap okudum. Kimse görmedi ama yemin ederim çıkmadım.",
    "Erkenden yattım, telefonumu da kapatmıştım. Hiçbir şeyden haberim yok.",
    "O saatte sahilde tek başıma yürüyüş yapıyordum, kafamı dağıtmam gerekiyordu.",
    "Arabamla şehir turu atıyordum, durup kimseyle konuşmadım.",
    "Maktulü en son geçen hafta gördüm, olay günü yanına bile yaklaşmadım.",
];

const EVIDENCE_LINKS: &[&str] = &[
    "Çamurun içine gömülmüş gümüş bir anahtarlık. Üzerinde '{initial}' harfi kazınmış.",
    "Masanın altına düşmüş bir ziyaretçi kartı. Üzerinde '{family}' yazıyor.",
    "Reçeteli bir sakinleştirici kutusu. Hasta adı kısmında '{suspect}' yazıyor.",
    "Saat 02:00 damgalı bir otopark fişi. Plaka sorgusu {suspect} adına kayıtlı aracı işaret ediyor.",
    "Köşesine '{initial}. {family}' işlenmiş monogramlı bir mendil.",
];

const HOMICIDE_LOCATIONS: &[&str] = &[
    "Karaköy Limanı'nın Terk Edilmiş 4. Hangarı",
    "Nişantaşı'ndaki Lüks Rezidansın Çatı Katı",
    "Belgrad Ormanı'nın Derinliklerindeki Avcı Kulübesi",
    "Eski Şehir Kütüphanesi'nin Tozlu Arşiv Odası",
    "Sanayi Bölgesindeki Soğuk Hava Deposu",
    "Tarihi Yarımada'daki Restorasyon Şantiyesi",
    "Boğaz Manzaralı Yalı'nın Kayıkhanesi",
];

const CYBER_LOCATIONS: &[&str] = &[
    "Merkez Bankası Veri Merkezi",
    "Kripto Borsa Sunucuları",
    "Askeri Araştırma Laboratuvarı Ağı",
    "Uluslararası Holding Ana Sistemi",
    "Yeraltı Veri Merkezi",
];

const THEFT_LOCATIONS: &[&str] = &[
    "Kraliyet Müzesi Kasa Dairesi",
    "Müzayede Evi",
    "Özel Koleksiyonerin Malikanesi",
    "Zırhlı Para Nakil Aracı",
    "Tarihi Saray Hazinesi",
];

const HOMICIDE_INTROS: &[&str] = &[
    "Gece yarısını vuran saat kulesinin çanları, {city} şehrinin karanlık sokaklarında yankılanırken, {location} civarından gelen bir çığlık sessizliği yırttı. Olay yerine intikal eden ekipler, şehrin tanınmış simalarından {victim} isimli kişinin cansız bedeniyle karşılaştı. Hava barut ve yağmur kokuyordu. Maktulün etrafındaki deliller, bunun basit bir soygun olmadığını, planlı ve soğukkanlı bir infaz olduğunu haykırıyordu.",
    "{city} üzerine çöken yoğun sis, {location} bölgesini adeta bir hayalet kasabaya çevirmişti. Devriye gezen bekçilerin el feneri, {victim} isimli kişinin kanlar içindeki bedenini aydınlattığında saatler 03:00'ü gösteriyordu. Maktul, son nefesini verirken katiliyle göz göze gelmiş olmalıydı. Olay yerindeki karmaşa, bir boğuşmanın yaşandığını gösterse de, katil arkasında çok az iz bırakacak kadar profesyoneldi.",
    "{city} şehrinde fırtınalı bir gecede, {location} ölümcül bir sessizliğe gömülmüştü. Şimşekler gökyüzünü yardığında, {victim} isimli kişinin yerde yatan bedeni kısa bir anlığına aydınlandı. Polis kordonu çekildiğinde, dedektifler bunun sıradan bir cinayet olmadığını hemen anladı. Maktulün yüzündeki donuk ifade ve olay yerindeki garip semboller, bu vakanın arkasında karanlık bir sırrın yattığına işaret ediyordu.",
];

const CYBER_INTROS: &[&str] = &[
    "{city} Finans Merkezi'nde kaos hakim. {location} sistemlerine yapılan siber saldırı, sadece verileri çalmakla kalmadı, tüm güvenlik protokollerini yerle bir etti. Hedefteki isim {victim}, dijital dünyanın kilit isimlerinden biriydi. Saldırganlar, arkalarında 'Hayalet Protokol' imzalı şifreli bir mesaj bırakarak sistemin kontrolünü ele geçirdi.",
    "Dünya borsaları açılmadan hemen önce, {city} şehrindeki {location} ağlarında tespit edilen anomali kısa sürede felakete dönüştü. 'Phantom' kod adlı, daha önce hiç görülmemiş bir malware, {victim} tarafından yönetilen çok gizli veritabanını saniyeler içinde şifreledi. Saldırının kaynağı belirsiz, ancak içeriden birinin yardım etmiş olma ihtimali çok yüksek.",
];

const THEFT_INTROS: &[&str] = &[
    "{city} şehrinin en korunaklı kalesi olarak bilinen {location}, bu sabah tarihinin en büyük ve en sessiz soygununa uyandı. Lazer sensörleri, basınç dedektörleri ve retina tarayıcıları... Hiçbiri alarm vermedi. {victim} koleksiyonuna ait paha biçilemez eser, yerinde yeller eserken bulundu.",
    "{city} şehrindeki {location} için gece vardiyası her zamanki gibi bitti, ta ki sabah sayımında bir parça eksik çıkana kadar. {victim} isimli kişiye emanet edilen en değerli eserin yerine kusursuz bir kopya bırakılmıştı. Bunu yapan kişi binayı, bekçileri ve nöbet çizelgesini çok iyi biliyordu.",
];

const HOMICIDE_CLUES: &[&str] = &[
    "Yerde, maktulün avucunda sıkıca tuttuğu kopmuş bir gömlek düğmesi.",
    "Çamurlu zeminde, özellikle sol topuğu aşınmış 43 numara bir ayakkabı izi.",
    "Kırılmış ve bataryası çıkarılmış bir cep telefonu.",
    "Darbe anında durmuş, camı kırık pahalı bir kol saati.",
    "Üzerinde baş harfler kazınmış gümüş bir çakmak.",
    "Maktulün cebinde bulunan, kanla lekelenmiş buruşturulmuş bir not.",
    "Olay yerinin yakınındaki çöp kutusuna atılmış lateks eldivenler.",
];

const CYBER_CLUES: &[&str] = &[
    "Sunucu odasının zeminine düşmüş, yüksek güvenlikli şifreli bir USB bellek.",
    "Güvenlik duvarı loglarında, gece yarısı yapılan yetkisiz giriş denemesi.",
    "Çöp kutusunda bulunan parçalanmış sabit disk parçaları.",
    "Sistem yöneticisinin klavyesinde tespit edilen yabancı parmak izi.",
    "Saldırganın kodu içine gizlediği alaycı bir metin dosyası.",
];

const THEFT_CLUES: &[&str] = &[
    "Havalandırma ızgarasına takılmış siyah kumaş parçası.",
    "Güvenlik kamerasının lensine sıkılmış siyah sprey boya.",
    "Kasanın yanına düşmüş, kopyalanmış bir parmak izi kalıbı.",
    "Personel girişinde kullanılan sahte bir kimlik kartı.",
    "Vitrin camını kesmek için kullanılan elmas uçlu alet.",
];

const CAUSES_OF_DEATH: &[&str] = &[
    "Siyanür Zehirlenmesi",
    "Ateşli Silah (9mm)",
    "Künt Travma",
    "Kalbe Saplanan Bıçak",
];

const ATTACK_VECTORS: &[&str] = &[
    "Fidye Yazılımı Şifrelemesi (AES-256)",
    "Ele Geçirilmiş Yönetici Kimlik Bilgileri",
    "Arka Kapılı Donanım Yazılımı Güncellemesi",
];

const STOLEN_ITEMS: &[&str] = &[
    "Doğunun Yıldızı Elması",
    "Fabergé İmparatorluk Yumurtası",
    "Kayıp Rembrandt Eskiz Defteri",
];

pub fn pack() -> LanguagePack {
    LanguagePack {
        cities: owned(CITIES),
        given_names_male: owned(GIVEN_MALE),
        given_names_female: owned(GIVEN_FEMALE),
        family_names: owned(FAMILY),
        jobs: owned(JOBS),
        personalities: owned(PERSONALITIES),
        relations: owned(RELATIONS),
        motives: owned(MOTIVES),
        corroborated_alibis: owned(CORROBORATED_ALIBIS),
        suspicious_alibis: owned(SUSPICIOUS_ALIBIS),
        evidence_links: owned(EVIDENCE_LINKS),
        evidence_label: "Gizli Kanıt".into(),
        entry_label: "Giriş Kapısı".into(),
        entry_marker: "Zorlama izi yok. Fail anahtara veya şifreye sahipti.".into(),
        autopsy: AutopsyText {
            margin: "±45 dk".into(),
            toxicology: "Temiz. Ancak yüksek kortizol seviyesi, ölüm anında aşırı stres altında olduğunu gösteriyor.".into(),
            wounds: "Önkollarda savunma yaraları var. Ölümcül darbe ani ve kesinmiş.".into(),
            notes: "Yara açısına göre katilin sağ elini kullandığı tahmin ediliyor.".into(),
        },
        server_log: vec![
            ServerLogTemplate {
                offset_seconds: -600,
                ip: "INTERNAL_NET".into(),
                action: "Kapı Kilidi Açıldı".into(),
                status: LogStatus::Success,
            },
            ServerLogTemplate {
                offset_seconds: -408,
                ip: "192.168.1.X".into(),
                action: "Yönetici Girişi".into(),
                status: LogStatus::Success,
            },
            ServerLogTemplate {
                offset_seconds: -120,
                ip: "192.168.1.X".into(),
                action: "Denetim Kaydı Silme".into(),
                status: LogStatus::Failed,
            },
            ServerLogTemplate {
                offset_seconds: 0,
                ip: "Unknown_Proxy".into(),
                action: "Veri Sızdırma".into(),
                status: LogStatus::Warning,
            },
        ],
        surveillance: vec![
            SurveillanceTemplate {
                offset_minutes: -16,
                camera: "C-14 Koridor".into(),
                observation: "Döngüye alınmış görüntü tespit edildi".into(),
            },
            SurveillanceTemplate {
                offset_minutes: 0,
                camera: "Kasa İçi".into(),
                observation: "3 dakikalık görüntü kesintisi".into(),
            },
        ],
        homicide: CategoryPack {
            locations: owned(HOMICIDE_LOCATIONS),
            intros: owned(HOMICIDE_INTROS),
            clues: owned(HOMICIDE_CLUES),
            causes: owned(CAUSES_OF_DEATH),
            scene_descriptions: owned(&[
                "Maktul doğal olmayan bir pozisyonda bulundu. Ölü katılığının (Rigor Mortis) başlaması, ölümün saatler önce gerçekleştiğini gösteriyor.",
            ]),
            scene_label: "Maktul Bedeni".into(),
            scene_marker: "Maktul burada bulundu. Boğuşma izleri belirgin.".into(),
            trace_label: "Kan İzi".into(),
            trace_marker: "Duvarda darbe yönünü gösteren yüksek hızlı kan sıçraması.".into(),
        },
        cyber: CategoryPack {
            locations: owned(CYBER_LOCATIONS),
            intros: owned(CYBER_INTROS),
            clues: owned(CYBER_CLUES),
            causes: owned(ATTACK_VECTORS),
            scene_descriptions: owned(&[
                "Sunucu odası sıcaklığı artmış. Acil durum soğutması devrede. Fiziksel ihlal doğrulandı.",
            ]),
            scene_label: "Ana Sunucu".into(),
            scene_marker: "Ele geçirilen kabin. Durum ışıkları kırmızı yanıp sönüyor, disk yuvaları hâlâ sıcak.".into(),
            trace_label: "Kurcalanmış Kablo".into(),
            trace_marker: "İzlenmeyen bir porta yönlendirilmiş bir ara kablo.".into(),
        },
        theft: CategoryPack {
            locations: owned(THEFT_LOCATIONS),
            intros: owned(THEFT_INTROS),
            clues: owned(THEFT_CLUES),
            causes: owned(STOLEN_ITEMS),
            scene_descriptions: owned(&[
                "Kasanın titanyum çubukları termal mızrakla kesilmiş. Profesyonel bir iş.",
            ]),
            scene_label: "Boş Vitrin".into(),
            scene_marker: "Eserin durduğu vitrin. Cam kusursuz bir daire şeklinde kesilmiş.".into(),
            trace_label: "Metal Talaşı".into(),
            trace_marker: "Yerde, termal mızraktan kalma hâlâ ılık ince metal talaşları.".into(),
        },
    }
}
