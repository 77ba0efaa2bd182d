/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. A reserved word can't be used as the variable.
If the expression fails, for example with a division by zero,
the variable keeps its previous value.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A + 10
40 PRINT A
RUN
10
20
```

*/
