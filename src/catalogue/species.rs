/// AqAdvisor 可辨識的魚種名稱，格式為 "Common Name (Genus species)"。
///
/// 順序即為模糊比對時的列舉順序，分數相同時以先出現者為準。
pub const SPECIES: &[&str] = &[
    "Adolfo Cory (Corydoras adolfoi)",
    "African Butterfly Fish (Pantodon buchholzi)",
    "Agassiz's Dwarf Cichlid (Apistogramma agassizii)",
    "Albino Bristlenose Pleco (Ancistrus cf. cirrhosus)",
    "Amano Shrimp (Caridina multidentata)",
    "Angelfish (Pterophyllum scalare)",
    "Assassin Snail (Clea helena)",
    "Banded Corydoras (Scleromystax barbatus)",
    "Black Neon Tetra (Hyphessobrycon herbertaxelrodi)",
    "Black Phantom Tetra (Hyphessobrycon megalopterus)",
    "Black Ruby Barb (Pethia nigrofasciata)",
    "Bleeding Heart Tetra (Hyphessobrycon erythrostigma)",
    "Blind Cave Tetra (Astyanax mexicanus)",
    "Bloodfin Tetra (Aphyocharax anisitsi)",
    "Blue Gourami (Trichopodus trichopterus)",
    "Bolivian Ram (Mikrogeophagus altispinosus)",
    "Boesemani Rainbowfish (Melanotaenia boesemani)",
    "Bristlenose Pleco (Ancistrus cirrhosus)",
    "Bronze Cory (Corydoras aeneus)",
    "Buenos Aires Tetra (Hyphessobrycon anisitsi)",
    "Bumblebee Goby (Brachygobius doriae)",
    "Celestial Pearl Danio (Danio margaritatus)",
    "Cardinal Tetra (Paracheirodon axelrodi)",
    "Cherry Barb (Puntius titteya)",
    "Cherry Shrimp (Neocaridina davidi)",
    "Chili Rasbora (Boraras brigittae)",
    "Clown Killifish (Epiplatys annulatus)",
    "Clown Loach (Chromobotia macracanthus)",
    "Clown Pleco (Panaqolus maccus)",
    "Common Goldfish (Carassius auratus)",
    "Congo Tetra (Phenacogrammus interruptus)",
    "Convict Cichlid (Amatitlania nigrofasciata)",
    "Dalmatian Molly (Poecilia latipinna)",
    "Diamond Tetra (Moenkhausia pittieri)",
    "Discus (Symphysodon aequifasciatus)",
    "Dwarf Chain Loach (Ambastaia sidthimunki)",
    "Dwarf Gourami (Trichogaster lalius)",
    "Dwarf Pufferfish (Carinotetraodon travancoricus)",
    "Ember Tetra (Hyphessobrycon amandae)",
    "Emerald Cory (Corydoras splendens)",
    "Endler's Livebearer (Poecilia wingei)",
    "Espei Rasbora (Trigonostigma espei)",
    "Figure Eight Puffer (Dichotomyctere ocellatus)",
    "Firemouth Cichlid (Thorichthys meeki)",
    "Flag Cichlid (Mesonauta festivus)",
    "Forktail Blue-eye Rainbowfish (Pseudomugil furcatus)",
    "Glass Catfish (Kryptopterus vitreolus)",
    "Glowlight Tetra (Hemigrammus erythrozonus)",
    "Gold Barb (Barbodes semifasciolatus)",
    "Golden Wonder Killifish (Aplocheilus lineatus)",
    "Green Neon Tetra (Paracheirodon simulans)",
    "Guppy (Poecilia reticulata)",
    "Harlequin Rasbora (Trigonostigma heteromorpha)",
    "Head and Tail Light Tetra (Hemigrammus ocellifer)",
    "Hillstream Loach (Sewellia lineolata)",
    "Honey Gourami (Trichogaster chuna)",
    "Julii Cory (Corydoras julii)",
    "Kribensis (Pelvicachromis pulcher)",
    "Kuhli Loach (Pangio kuhlii)",
    "Lemon Tetra (Hyphessobrycon pulchripinnis)",
    "Leopard Danio (Danio rerio var. frankei)",
    "Licorice Gourami (Parosphromenus deissneri)",
    "Marbled Hatchetfish (Carnegiella strigata)",
    "Mystery Snail (Pomacea diffusa)",
    "Neon Blue Dwarf Rainbowfish (Melanotaenia praecox)",
    "Neon Tetra (Paracheirodon innesi)",
    "Nerite Snail (Neritina natalensis)",
    "Oscar (Astronotus ocellatus)",
    "Otocinclus (Otocinclus vittatus)",
    "Panda Cory (Corydoras panda)",
    "Paradise Fish (Macropodus opercularis)",
    "Pearl Gourami (Trichogaster leerii)",
    "Penguin Tetra (Thayeria boehlkei)",
    "Peppered Cory (Corydoras paleatus)",
    "Platy (Xiphophorus maculatus)",
    "Pygmy Cory (Corydoras pygmaeus)",
    "Rainbow Shark (Epalzeorhynchos frenatum)",
    "Red Tail Shark (Epalzeorhynchos bicolor)",
    "Rosy Barb (Pethia conchonius)",
    "Rummy Nose Tetra (Hemigrammus rhodostomus)",
    "Sailfin Molly (Poecilia velifera)",
    "Serpae Tetra (Hyphessobrycon eques)",
    "Siamese Algae Eater (Crossocheilus oblongus)",
    "Siamese Fighting Fish (Betta splendens)",
    "Silver Dollar (Metynnis argenteus)",
    "Silvertip Tetra (Hasemania nana)",
    "Sparkling Gourami (Trichopsis pumila)",
    "Sterbai Cory (Corydoras sterbai)",
    "Swordtail (Xiphophorus hellerii)",
    "Tiger Barb (Puntigrus tetrazona)",
    "Threadfin Rainbowfish (Iriatherina werneri)",
    "White Cloud Mountain Minnow (Tanichthys albonubes)",
    "X-Ray Tetra (Pristella maxillaris)",
    "Yoyo Loach (Botia almorhae)",
    "Zebra Danio (Danio rerio)",
    "Zebra Pleco (Hypancistrus zebra)",
];
