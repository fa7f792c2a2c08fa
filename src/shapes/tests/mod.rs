mod rect;
