/// `(infinitive, past simple, past participle, translation)`, most common first.
///
/// A `/` separates accepted alternatives.
pub(super) const IRREGULAR_VERBS: &[(&str, &str, &str, &str)] = &[
    ("be", "was/were", "been", "быть"),
    ("have", "had", "had", "иметь"),
    ("do", "did", "done", "делать"),
    ("say", "said", "said", "сказать"),
    ("go", "went", "gone", "идти"),
    ("get", "got", "got/gotten", "получать"),
    ("make", "made", "made", "создавать"),
    ("know", "knew", "known", "знать"),
    ("think", "thought", "thought", "думать"),
    ("take", "took", "taken", "брать"),
    ("see", "saw", "seen", "видеть"),
    ("come", "came", "come", "приходить"),
    ("give", "gave", "given", "давать"),
    ("find", "found", "found", "находить"),
    ("tell", "told", "told", "рассказывать"),
    ("become", "became", "become", "становиться"),
    ("leave", "left", "left", "оставлять"),
    ("feel", "felt", "felt", "чувствовать"),
    ("bring", "brought", "brought", "приносить"),
    ("begin", "began", "begun", "начинать"),
    ("keep", "kept", "kept", "хранить"),
    ("hold", "held", "held", "держать"),
    ("write", "wrote", "written", "писать"),
    ("stand", "stood", "stood", "стоять"),
    ("hear", "heard", "heard", "слышать"),
    ("let", "let", "let", "позволять"),
    ("mean", "meant", "meant", "значить"),
    ("set", "set", "set", "устанавливать"),
    ("meet", "met", "met", "встречать"),
    ("run", "ran", "run", "бежать"),
    ("pay", "paid", "paid", "платить"),
    ("sit", "sat", "sat", "сидеть"),
    ("speak", "spoke", "spoken", "говорить"),
    ("lie", "lay", "lain", "лежать"),
    ("lead", "led", "led", "вести"),
    ("read", "read", "read", "читать"),
    ("grow", "grew", "grown", "расти"),
    ("lose", "lost", "lost", "терять"),
    ("fall", "fell", "fallen", "падать"),
    ("send", "sent", "sent", "отправлять"),
    ("build", "built", "built", "строить"),
    ("understand", "understood", "understood", "понимать"),
    ("draw", "drew", "drawn", "рисовать"),
    ("break", "broke", "broken", "ломать"),
    ("spend", "spent", "spent", "тратить"),
    ("cut", "cut", "cut", "резать"),
    ("rise", "rose", "risen", "подниматься"),
    ("drive", "drove", "driven", "водить"),
    ("buy", "bought", "bought", "покупать"),
    ("wear", "wore", "worn", "носить"),
    ("choose", "chose", "chosen", "выбирать"),
    ("seek", "sought", "sought", "искать"),
    ("throw", "threw", "thrown", "бросать"),
    ("catch", "caught", "caught", "ловить"),
    ("deal", "dealt", "dealt", "иметь дело"),
    ("win", "won", "won", "побеждать"),
    ("forget", "forgot", "forgotten", "забывать"),
    ("sell", "sold", "sold", "продавать"),
    ("eat", "ate", "eaten", "есть"),
    ("teach", "taught", "taught", "учить"),
    ("fight", "fought", "fought", "сражаться"),
    ("fly", "flew", "flown", "летать"),
    ("drink", "drank", "drunk", "пить"),
    ("sleep", "slept", "slept", "спать"),
    ("sing", "sang", "sung", "петь"),
    ("swim", "swam", "swum", "плавать"),
    ("hide", "hid", "hidden", "прятать"),
    ("shake", "shook", "shaken", "трясти"),
    ("steal", "stole", "stolen", "красть"),
    ("ride", "rode", "ridden", "ездить верхом"),
    ("bite", "bit", "bitten", "кусать"),
    ("blow", "blew", "blown", "дуть"),
    ("freeze", "froze", "frozen", "замерзать"),
    ("hang", "hung", "hung", "висеть"),
    ("shoot", "shot", "shot", "стрелять"),
    ("shut", "shut", "shut", "закрывать"),
    ("sink", "sank", "sunk", "тонуть"),
    ("feed", "fed", "fed", "кормить"),
    ("dig", "dug", "dug", "копать"),
    ("bend", "bent", "bent", "сгибать"),
    ("bet", "bet", "bet", "держать пари"),
    ("bleed", "bled", "bled", "кровоточить"),
    ("breed", "bred", "bred", "разводить"),
    ("burst", "burst", "burst", "взрываться"),
    ("cling", "clung", "clung", "цепляться"),
    ("creep", "crept", "crept", "ползти"),
    ("forbid", "forbade", "forbidden", "запрещать"),
    ("forgive", "forgave", "forgiven", "прощать"),
    ("grind", "ground", "ground", "молоть"),
    ("kneel", "knelt", "knelt", "стоять на коленях"),
    ("lend", "lent", "lent", "одалживать"),
    ("light", "lit", "lit", "зажигать"),
    ("ring", "rang", "rung", "звонить"),
    ("swear", "swore", "sworn", "клясться"),
    ("sweep", "swept", "swept", "подметать"),
    ("tear", "tore", "torn", "рвать"),
    ("weep", "wept", "wept", "плакать"),
    ("wake", "woke", "woken", "просыпаться"),
    ("wind", "wound", "wound", "наматывать"),
    ("strike", "struck", "struck", "ударять"),
];
